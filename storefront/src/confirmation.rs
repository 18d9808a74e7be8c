use catalog::{Product, format_minor_units, product_by_price_id};
use chrono::{LocalResult, TimeZone, Utc};
use common::{
    error::Res,
    projections::{OrderProjection, SubscriptionProjection},
};

/// Display state of the post-purchase confirmation panel.
#[derive(Debug)]
pub enum ConfirmationState {
    /// The page was reached without a session id; there is nothing to look up.
    NoSession,
    /// The order row has not appeared yet. Shown as
    /// "Order details will be available shortly."
    Pending,
    Confirmed(OrderDetails),
}

/// Formatted order fields for the confirmation panel.
#[derive(Debug)]
pub struct OrderDetails {
    pub order_id: i64,
    pub amount: String,
    pub payment_status: String,
    pub date: String,
}

impl From<OrderProjection> for OrderDetails {
    fn from(order: OrderProjection) -> Self {
        OrderDetails {
            order_id: order.order_id,
            amount: format_minor_units(order.amount_total, &order.currency),
            payment_status: order.payment_status,
            date: order.order_date.format("%B %-d, %Y, %I:%M %p").to_string(),
        }
    }
}

/// Derives the confirmation panel state from the session id in the URL and
/// the order view lookup. A failed lookup is logged and rendered as the
/// pending state, not as an error.
pub fn confirmation_state(
    session_id: Option<&str>,
    lookup: Res<Option<OrderProjection>>,
) -> ConfirmationState {
    if session_id.is_none() {
        return ConfirmationState::NoSession;
    }

    match lookup {
        Ok(Some(order)) => ConfirmationState::Confirmed(order.into()),
        Ok(None) => ConfirmationState::Pending,
        Err(err) => {
            log::error!("Error fetching order details: {}", err);
            ConfirmationState::Pending
        }
    }
}

/// Visual weight of a subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Good,
    Info,
    Alert,
    Muted,
    Unknown,
}

pub fn status_tone(status: &str) -> StatusTone {
    match status {
        "active" => StatusTone::Good,
        "trialing" => StatusTone::Info,
        "past_due" | "unpaid" => StatusTone::Alert,
        "canceled" => StatusTone::Muted,
        _ => StatusTone::Unknown,
    }
}

/// Display state of the subscription panel.
#[derive(Debug)]
pub enum SubscriptionView {
    /// The view lookup failed; the message is shown to the user.
    Error(String),
    /// No subscription on record.
    None,
    Current {
        projection: SubscriptionProjection,
        /// Catalog product for the subscribed price, when it is still listed.
        product: Option<&'static Product>,
        tone: StatusTone,
    },
}

/// Derives the subscription panel state from the view lookup. A row without
/// a subscription id is treated the same as no row at all.
pub fn subscription_view(lookup: Res<Option<SubscriptionProjection>>) -> SubscriptionView {
    match lookup {
        Err(err) => SubscriptionView::Error(err.to_string()),
        Ok(None) => SubscriptionView::None,
        Ok(Some(projection)) => {
            if projection.subscription_id.is_none() {
                return SubscriptionView::None;
            }
            let product = projection.price_id.as_deref().and_then(product_by_price_id);
            let tone = status_tone(&projection.subscription_status);
            SubscriptionView::Current {
                projection,
                product,
                tone,
            }
        }
    }
}

/// Renders an epoch-seconds billing period bound as an en-US long date.
pub fn format_period_date(epoch_seconds: i64) -> String {
    match Utc.timestamp_opt(epoch_seconds, 0) {
        LocalResult::Single(date) => date.format("%B %-d, %Y").to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use common::error::AppError;

    use super::*;

    fn order_fixture() -> OrderProjection {
        OrderProjection {
            order_id: 42,
            checkout_session_id: "cs_test_1".to_string(),
            amount_total: 355000,
            currency: "eur".to_string(),
            payment_status: "paid".to_string(),
            order_date: DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    fn subscription_fixture() -> SubscriptionProjection {
        SubscriptionProjection {
            subscription_id: Some("sub_1".to_string()),
            subscription_status: "active".to_string(),
            price_id: Some("price_1QuYsLDbqXbu8HsFepTQpix9".to_string()),
            current_period_start: Some(1_717_200_000),
            current_period_end: Some(1_719_792_000),
            cancel_at_period_end: false,
            payment_method_brand: Some("visa".to_string()),
            payment_method_last4: Some("4242".to_string()),
        }
    }

    #[test]
    fn unknown_session_renders_pending_not_error() {
        let state = confirmation_state(Some("cs_unknown"), Ok(None));
        assert!(matches!(state, ConfirmationState::Pending));
    }

    #[test]
    fn failed_lookup_also_renders_pending() {
        let state = confirmation_state(
            Some("cs_test_1"),
            Err(AppError::Query("permission denied".to_string())),
        );
        assert!(matches!(state, ConfirmationState::Pending));
    }

    #[test]
    fn missing_session_id_means_nothing_to_look_up() {
        let state = confirmation_state(None, Ok(None));
        assert!(matches!(state, ConfirmationState::NoSession));
    }

    #[test]
    fn confirmed_orders_are_formatted_for_display() {
        let state = confirmation_state(Some("cs_test_1"), Ok(Some(order_fixture())));
        match state {
            ConfirmationState::Confirmed(details) => {
                assert_eq!(details.order_id, 42);
                assert_eq!(details.amount, "\u{20ac}3,550.00");
                assert_eq!(details.payment_status, "paid");
                assert_eq!(details.date, "June 1, 2025, 12:00 PM");
            }
            other => panic!("expected confirmed state, got {:?}", other),
        }
    }

    #[test]
    fn status_tones_follow_known_statuses() {
        assert_eq!(status_tone("active"), StatusTone::Good);
        assert_eq!(status_tone("trialing"), StatusTone::Info);
        assert_eq!(status_tone("past_due"), StatusTone::Alert);
        assert_eq!(status_tone("unpaid"), StatusTone::Alert);
        assert_eq!(status_tone("canceled"), StatusTone::Muted);
        assert_eq!(status_tone("paused"), StatusTone::Unknown);
    }

    #[test]
    fn subscription_panel_resolves_the_catalog_product() {
        let view = subscription_view(Ok(Some(subscription_fixture())));
        match view {
            SubscriptionView::Current { product, tone, .. } => {
                assert_eq!(tone, StatusTone::Good);
                assert!(product.unwrap().name.contains("Laser Spot Welder"));
            }
            other => panic!("expected current subscription, got {:?}", other),
        }
    }

    #[test]
    fn row_without_subscription_id_counts_as_no_subscription() {
        let mut projection = subscription_fixture();
        projection.subscription_id = None;
        let view = subscription_view(Ok(Some(projection)));
        assert!(matches!(view, SubscriptionView::None));
    }

    #[test]
    fn lookup_errors_keep_their_message() {
        let view = subscription_view(Err(AppError::Query("permission denied".to_string())));
        match view {
            SubscriptionView::Error(message) => assert_eq!(message, "permission denied"),
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn period_bounds_render_as_long_dates() {
        assert_eq!(format_period_date(1_717_200_000), "June 1, 2024");
    }
}
