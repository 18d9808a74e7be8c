use common::{
    error::{AppError, Res},
    projections::{OrderProjection, SubscriptionProjection},
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::wire::error_message;

/// Read-only access to the backend's projection views. One request per
/// lookup, no caching here; callers hold on to results as long as they need.
pub struct ProjectionClient {
    http: reqwest::Client,
    backend_url: String,
}

impl ProjectionClient {
    pub fn new(backend_url: impl Into<String>) -> Self {
        ProjectionClient {
            http: reqwest::Client::new(),
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Order lookup, keyed by checkout session id. `None` means the provider
    /// has not reported the order yet, which is a valid state.
    pub async fn order_for_session(&self, session_id: &str) -> Res<Option<OrderProjection>> {
        let response = self
            .http
            .get(format!("{}/views/order", self.backend_url))
            .query(&[("session_id", session_id)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        decode_view_response(status, &body)
    }

    /// Subscription lookup for the authenticated caller; the backend scopes
    /// the query to the token's customer. `None` means no subscription.
    pub async fn current_subscription(
        &self,
        access_token: &str,
    ) -> Res<Option<SubscriptionProjection>> {
        let response = self
            .http
            .get(format!("{}/views/subscription", self.backend_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        decode_view_response(status, &body)
    }
}

fn decode_view_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Res<Option<T>> {
    if !status.is_success() {
        return Err(AppError::Query(error_message(
            body,
            "Failed to load details",
        )));
    }

    serde_json::from_slice::<Option<T>>(body).map_err(|e| AppError::Query(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_body_is_absence_not_an_error() {
        let order: Option<OrderProjection> =
            decode_view_response(StatusCode::OK, b"null").unwrap();
        assert!(order.is_none());
    }

    #[test]
    fn order_rows_decode_with_provider_amounts() {
        let body = br#"{
            "order_id": 42,
            "checkout_session_id": "cs_test_1",
            "amount_total": 355000,
            "currency": "eur",
            "payment_status": "paid",
            "order_date": "2025-06-01T12:00:00Z"
        }"#;
        let order: Option<OrderProjection> =
            decode_view_response(StatusCode::OK, body).unwrap();
        let order = order.unwrap();
        assert_eq!(order.order_id, 42);
        assert_eq!(order.amount_total, 355000);
        assert_eq!(order.payment_status, "paid");
    }

    #[test]
    fn query_failures_surface_the_backend_message() {
        let err = decode_view_response::<OrderProjection>(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":"permission denied"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Query(_)));
        assert_eq!(err.to_string(), "permission denied");
    }

    #[test]
    fn opaque_failures_get_a_generic_message() {
        let err =
            decode_view_response::<SubscriptionProjection>(StatusCode::BAD_GATEWAY, b"<html>")
                .unwrap_err();
        assert_eq!(err.to_string(), "Failed to load details");
    }
}
