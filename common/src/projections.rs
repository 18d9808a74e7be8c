use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row shape of the `stripe_user_orders` view.
///
/// Denormalized from the payment provider's records; `amount_total` is in
/// minor currency units, exactly as the provider reports it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderProjection {
    pub order_id: i64,
    pub checkout_session_id: String,
    pub amount_total: i64,
    pub currency: String,
    pub payment_status: String,
    pub order_date: DateTime<Utc>,
}

/// Row shape of the `stripe_user_subscriptions` view.
///
/// Period bounds are epoch seconds. `subscription_status` is kept as the
/// provider's string; display code classifies the known values and passes
/// unknown ones through.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscriptionProjection {
    pub subscription_id: Option<String>,
    pub subscription_status: String,
    pub price_id: Option<String>,
    pub current_period_start: Option<i64>,
    pub current_period_end: Option<i64>,
    pub cancel_at_period_end: bool,
    pub payment_method_brand: Option<String>,
    pub payment_method_last4: Option<String>,
}
