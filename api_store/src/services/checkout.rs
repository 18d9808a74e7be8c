use std::collections::HashMap;

use catalog::PurchaseMode;
use common::{
    env_config::Config,
    error::{AppError, Res},
};
use stripe::{CheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession, Currency};

use crate::dtos::checkout::{CatalogCheckoutRequest, EntryCheckout, minor_units};

/// Creates a checkout session for a catalog product.
/// The product is referenced by its provider price id; the session inherits
/// the price configured there. Redirect targets come from the caller.
pub async fn create_catalog_session(
    client: &Client,
    req: &CatalogCheckoutRequest,
) -> Res<CheckoutSession> {
    let params = CreateCheckoutSession {
        payment_method_types: Some(vec![stripe::CreateCheckoutSessionPaymentMethodTypes::Card]),
        line_items: Some(vec![stripe::CreateCheckoutSessionLineItems {
            price: Some(req.price_id.clone()),
            quantity: Some(1),
            ..Default::default()
        }]),
        mode: Some(match req.mode {
            PurchaseMode::Payment => CheckoutSessionMode::Payment,
            PurchaseMode::Subscription => CheckoutSessionMode::Subscription,
        }),
        success_url: Some(req.success_url.as_str()),
        cancel_url: Some(req.cancel_url.as_str()),
        ..Default::default()
    };
    CheckoutSession::create(client, params)
        .await
        .map_err(AppError::from)
}

/// Creates a one-time payment session for a grading entry.
/// The price is built ad hoc from the validated amount; the entry identifier
/// and number ride along as metadata so the webhook pipeline can reconcile
/// the payment.
pub async fn create_entry_session(
    client: &Client,
    config: &Config,
    req: &EntryCheckout,
) -> Res<CheckoutSession> {
    let params = CreateCheckoutSession {
        payment_method_types: Some(vec![stripe::CreateCheckoutSessionPaymentMethodTypes::Card]),
        line_items: Some(vec![stripe::CreateCheckoutSessionLineItems {
            price_data: Some(stripe::CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::EUR,
                product_data: Some(
                    stripe::CreateCheckoutSessionLineItemsPriceDataProductData {
                        name: format!("Grading Entry #{}", req.entry_number),
                        metadata: Some(HashMap::from([(
                            "entryId".to_string(),
                            req.entry_id.clone(),
                        )])),
                        ..Default::default()
                    },
                ),
                unit_amount: Some(minor_units(req.amount)),
                ..Default::default()
            }),
            quantity: Some(1),
            ..Default::default()
        }]),
        mode: Some(CheckoutSessionMode::Payment),
        success_url: Some(config.entry_success_url.as_str()),
        cancel_url: Some(config.entry_cancel_url.as_str()),
        metadata: Some(HashMap::from([
            ("entryId".to_string(), req.entry_id.clone()),
            ("entryNumber".to_string(), req.entry_number.to_string()),
        ])),
        ..Default::default()
    };
    CheckoutSession::create(client, params)
        .await
        .map_err(AppError::from)
}
