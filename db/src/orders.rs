use common::{
    error::{AppError, Res},
    projections::OrderProjection,
};
use sqlx::PgPool;

/// Fetches the order projection for a checkout session.
/// Returns None when the provider has not reported the order yet; that is a
/// valid state, not an error.
pub async fn order_by_checkout_session(
    pool: &PgPool,
    session_id: &str,
) -> Res<Option<OrderProjection>> {
    sqlx::query_as::<_, OrderProjection>(
        r#"SELECT order_id, checkout_session_id, amount_total, currency, payment_status, order_date
           FROM stripe_user_orders
           WHERE checkout_session_id = $1"#,
    )
    .bind(session_id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::from)
}
