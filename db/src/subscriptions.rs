use common::{
    error::{AppError, Res},
    projections::SubscriptionProjection,
};
use sqlx::PgPool;

/// Fetches the subscription projection for a provider customer.
/// A customer has at most one row in the view; None means no subscription.
pub async fn subscription_for_customer(
    pool: &PgPool,
    customer_id: &str,
) -> Res<Option<SubscriptionProjection>> {
    sqlx::query_as::<_, SubscriptionProjection>(
        r#"SELECT subscription_id, subscription_status, price_id,
                  current_period_start, current_period_end, cancel_at_period_end,
                  payment_method_brand, payment_method_last4
           FROM stripe_user_subscriptions
           WHERE customer_id = $1"#,
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::from)
}
