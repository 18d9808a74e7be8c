use std::collections::HashSet;
use std::sync::Mutex;

use catalog::{Product, PurchaseMode};
use common::error::{AppError, Res};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::wire::error_message;

/// Performs the terminal full-page navigation once a session URL is known.
/// Nothing else runs client-side after a successful redirect.
pub trait Navigator {
    fn navigate(&self, url: &Url);
}

#[derive(Debug, Serialize)]
struct CheckoutRequestBody {
    price_id: String,
    mode: PurchaseMode,
    success_url: String,
    cancel_url: String,
}

/// Requests checkout sessions from the backend and tracks which products
/// have a request outstanding.
///
/// Initiation is deliberately not idempotent: every call opens a new
/// provider session. The per-product in-flight markers exist so callers can
/// disable re-entry for a product while its request is pending.
pub struct CheckoutInitiator {
    http: reqwest::Client,
    backend_url: String,
    origin: String,
    in_flight: Mutex<HashSet<String>>,
}

impl CheckoutInitiator {
    pub fn new(backend_url: impl Into<String>, origin: impl Into<String>) -> Self {
        CheckoutInitiator {
            http: reqwest::Client::new(),
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            origin: origin.into().trim_end_matches('/').to_string(),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// True while a checkout request for this product is outstanding.
    /// Tracked per product id, not globally.
    pub fn in_flight(&self, product_id: &str) -> bool {
        self.in_flight.lock().unwrap().contains(product_id)
    }

    /// Requests a checkout session for a catalog product and returns the
    /// redirect URL.
    ///
    /// Fails fast with `Unauthenticated` when no token is supplied; the
    /// network is never touched in that case. A request for a product that
    /// is already in flight is refused locally, also without a network call.
    pub async fn initiate(&self, product: &Product, access_token: Option<&str>) -> Res<Url> {
        let token = access_token.ok_or_else(|| {
            AppError::Unauthenticated("Please sign in to make a purchase".to_string())
        })?;

        let _marker = self.begin(product.id)?;

        let (success_url, cancel_url) = redirect_targets(&self.origin);
        let request = CheckoutRequestBody {
            price_id: product.price_id.to_string(),
            mode: product.mode,
            success_url,
            cancel_url,
        };

        let response = self
            .http
            .post(format!("{}/functions/stripe-checkout", self.backend_url))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        decode_checkout_response(status, &body)
    }

    /// Initiates checkout and hands the URL to the navigator for the
    /// full-page redirect. Terminal for this user action; a failure requires
    /// a fresh attempt, nothing is retried.
    pub async fn purchase(
        &self,
        product: &Product,
        access_token: Option<&str>,
        navigator: &dyn Navigator,
    ) -> Res<()> {
        let url = self.initiate(product, access_token).await?;
        navigator.navigate(&url);
        Ok(())
    }

    fn begin(&self, product_id: &str) -> Res<FlightMarker<'_>> {
        let mut markers = self.in_flight.lock().unwrap();
        if !markers.insert(product_id.to_string()) {
            return Err(AppError::CheckoutFailed(
                "A checkout for this product is already in progress".to_string(),
            ));
        }
        Ok(FlightMarker {
            markers: &self.in_flight,
            product_id: product_id.to_string(),
        })
    }
}

/// Releases the product's in-flight marker however the request settles.
struct FlightMarker<'a> {
    markers: &'a Mutex<HashSet<String>>,
    product_id: String,
}

impl Drop for FlightMarker<'_> {
    fn drop(&mut self) {
        if let Ok(mut markers) = self.markers.lock() {
            markers.remove(&self.product_id);
        }
    }
}

/// Success and cancel targets derived from the page origin. The
/// `{CHECKOUT_SESSION_ID}` placeholder is sent literally; the provider
/// substitutes its session id at redirect time.
fn redirect_targets(origin: &str) -> (String, String) {
    (
        format!("{origin}/success?session_id={{CHECKOUT_SESSION_ID}}"),
        format!("{origin}/products"),
    )
}

#[derive(Debug, Deserialize)]
struct CheckoutResponseBody {
    url: Option<String>,
}

fn decode_checkout_response(status: StatusCode, body: &[u8]) -> Res<Url> {
    if !status.is_success() {
        return Err(AppError::CheckoutFailed(error_message(
            body,
            "Failed to create checkout session",
        )));
    }

    let url = serde_json::from_slice::<CheckoutResponseBody>(body)
        .ok()
        .and_then(|body| body.url)
        .filter(|url| !url.is_empty())
        .ok_or(AppError::NoRedirectUrl)?;

    Url::parse(&url).map_err(|_| AppError::NoRedirectUrl)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> &'static Product {
        catalog::product_by_id("prod_RkQreEfKIpRsCx").unwrap()
    }

    fn test_initiator() -> CheckoutInitiator {
        // port 9 (discard) is never listening; any network attempt errors
        CheckoutInitiator::new("http://127.0.0.1:9", "https://shop.example")
    }

    #[tokio::test]
    async fn no_token_fails_before_any_network_request() {
        let initiator = test_initiator();
        let err = initiator.initiate(test_product(), None).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated(_)));
        assert_eq!(err.to_string(), "Please sign in to make a purchase");
        assert!(!initiator.in_flight(test_product().id));
    }

    struct RecordingNavigator(std::sync::Mutex<Vec<Url>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &Url) {
            self.0.lock().unwrap().push(url.clone());
        }
    }

    #[tokio::test]
    async fn failed_purchase_never_navigates() {
        let initiator = test_initiator();
        let navigator = RecordingNavigator(std::sync::Mutex::new(Vec::new()));

        let err = initiator
            .purchase(test_product(), None, &navigator)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthenticated(_)));
        assert!(navigator.0.lock().unwrap().is_empty());
    }

    #[test]
    fn success_target_embeds_literal_session_placeholder() {
        let (success, cancel) = redirect_targets("https://shop.example");
        assert_eq!(
            success,
            "https://shop.example/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(cancel, "https://shop.example/products");
    }

    #[test]
    fn successful_response_yields_exact_redirect_url() {
        let url = decode_checkout_response(
            StatusCode::OK,
            br#"{"url":"https://pay.example/s/123"}"#,
        )
        .unwrap();
        assert_eq!(url.to_string(), "https://pay.example/s/123");
    }

    #[test]
    fn endpoint_error_message_is_surfaced_verbatim() {
        let err = decode_checkout_response(StatusCode::BAD_REQUEST, br#"{"error":"bad price"}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::CheckoutFailed(_)));
        assert_eq!(err.to_string(), "bad price");
    }

    #[test]
    fn unreadable_error_body_falls_back_to_generic_message() {
        let err =
            decode_checkout_response(StatusCode::INTERNAL_SERVER_ERROR, b"gateway timeout")
                .unwrap_err();
        assert_eq!(err.to_string(), "Failed to create checkout session");
    }

    #[test]
    fn success_without_url_is_no_redirect_url() {
        let err = decode_checkout_response(StatusCode::OK, b"{}").unwrap_err();
        assert!(matches!(err, AppError::NoRedirectUrl));

        let err = decode_checkout_response(StatusCode::OK, br#"{"url":""}"#).unwrap_err();
        assert!(matches!(err, AppError::NoRedirectUrl));
    }

    #[test]
    fn second_request_for_same_product_is_refused_while_outstanding() {
        let initiator = test_initiator();

        let marker = initiator.begin("prod_a").unwrap();
        assert!(initiator.in_flight("prod_a"));
        assert!(initiator.begin("prod_a").is_err());

        // other products are unaffected
        assert!(!initiator.in_flight("prod_b"));
        drop(initiator.begin("prod_b").unwrap());

        drop(marker);
        assert!(!initiator.in_flight("prod_a"));
        assert!(initiator.begin("prod_a").is_ok());
    }
}
