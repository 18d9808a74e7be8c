use std::sync::Arc;

use actix_web::{HttpRequest, Responder, get, web};
use common::{error::Res, http::Success, jwt};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    pub session_id: String,
}

/// Looks up the order recorded for a checkout session.
///
/// # Input
/// - `session_id`: Query parameter with the provider checkout session id
///
/// # Output
/// - Success: The order projection as JSON, or `null` while the provider has
///   not reported the order yet ("no row" is a valid state, not an error)
/// - Error: 500 if the view query fails
#[get("/order")]
pub async fn get_order(
    query: web::Query<OrderQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let order = db::orders::order_by_checkout_session(&pool, &query.session_id).await?;
    Success::ok(order)
}

/// Looks up the subscription of the authenticated caller.
///
/// # Input
/// - Bearer token; the extraction middleware has already validated it and
///   stored the claims, which carry the provider customer id used for scoping
///
/// # Output
/// - Success: The subscription projection as JSON, or `null` when the caller
///   has never subscribed
/// - Error: 401 without a valid token, 500 if the view query fails
#[get("/subscription")]
pub async fn get_subscription(req: HttpRequest, pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let claims = jwt::claims_from_request(&req)?;

    let subscription =
        db::subscriptions::subscription_for_customer(&pool, &claims.stripe_customer_id).await?;
    Success::ok(subscription)
}
