use std::sync::Arc;

use actix_web::{HttpResponse, Responder, post, route, web};
use common::{
    env_config::Config,
    error::{AppError, Res},
    http::Success,
    stripe,
};

use crate::{
    dtos::checkout::{CatalogCheckoutRequest, CheckoutSessionResponse, EntryCheckoutRequest},
    services,
};

/// The secret is read per request: a deployment without it keeps serving
/// and fails each checkout with a configuration error instead of crashing.
fn require_secret(config: &Config) -> Res<&str> {
    if config.stripe_secret_key.is_empty() {
        return Err(AppError::Configuration(
            "Missing Stripe secret key".to_string(),
        ));
    }
    Ok(&config.stripe_secret_key)
}

/// Answers bare preflights with a fixed body; real CORS preflights carrying
/// `Access-Control-Request-Method` are handled by the CORS layer before the
/// request reaches this route.
#[route("/checkout-session", method = "OPTIONS")]
pub async fn checkout_session_preflight() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Creates a payment checkout session for a grading entry with ad-hoc pricing.
///
/// # Input
/// - `body`: JSON payload with:
///   - `amount`: Price in decimal currency units (euros)
///   - `entryId`: Opaque identifier of the grading entry being paid for
///   - `entryNumber`: Sequential number of the entry
/// - `config`: Application configuration with Stripe API credentials
///
/// # Output
/// - Success: Returns a JSON object with a URL to the Stripe Checkout session
/// - Error: 500 if the Stripe secret is not configured or the body is not
///   JSON, 400 if any required field is missing, 500 with the provider's
///   message if session creation fails
///
/// # Frontend Example
/// ```javascript
/// // Using fetch API
/// const response = await fetch('/functions/checkout-session', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({
///     amount: 19.99,
///     entryId: "e1",
///     entryNumber: 7
///   })
/// });
///
/// if (response.ok) {
///   const { url } = await response.json();
///   // Redirect the user to the Stripe Checkout page
///   window.location.href = url;
/// }
/// ```
#[post("/checkout-session")]
pub async fn post_checkout_session(
    body: web::Bytes,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let secret = require_secret(&config)?;

    let request: EntryCheckoutRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Internal(e.to_string()))?;
    let entry = request.validated()?;

    let client = stripe::create_client(secret);
    let session = services::checkout::create_entry_session(&client, &config, &entry).await?;

    Success::ok(CheckoutSessionResponse {
        url: session.url.unwrap_or_default(),
    })
}

/// Creates a checkout session for a catalog product.
///
/// # Input
/// - `req`: JSON payload with:
///   - `price_id`: Provider price id of the catalog product
///   - `mode`: "payment" for one-time purchases, "subscription" for recurring
///   - `success_url`: Where to land after checkout; may embed the literal
///     `{CHECKOUT_SESSION_ID}` placeholder
///   - `cancel_url`: Where to land when checkout is abandoned
/// - `config`: Application configuration with Stripe API credentials
///
/// # Output
/// - Success: Returns a JSON object with a URL to the Stripe Checkout session
/// - Error: 500 if the Stripe secret is not configured or the provider
///   rejects the session
#[post("/stripe-checkout")]
pub async fn post_stripe_checkout(
    req: web::Json<CatalogCheckoutRequest>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let secret = require_secret(&config)?;

    let client = stripe::create_client(secret);
    let session = services::checkout::create_catalog_session(&client, &req).await?;

    Success::ok(CheckoutSessionResponse {
        url: session.url.unwrap_or_default(),
    })
}
