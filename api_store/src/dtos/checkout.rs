use catalog::PurchaseMode;
use common::error::{AppError, Res};
use serde::{Deserialize, Serialize};

/// Catalog purchase flow: the product is already priced at the provider,
/// the client supplies its own redirect targets.
#[derive(Debug, Deserialize)]
pub struct CatalogCheckoutRequest {
    pub price_id: String,
    pub mode: PurchaseMode,
    pub success_url: String,
    pub cancel_url: String,
}

/// Ad-hoc pricing flow for grading entries. Wire names are camelCase.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCheckoutRequest {
    pub amount: Option<f64>,
    pub entry_id: Option<String>,
    pub entry_number: Option<i64>,
}

/// An [`EntryCheckoutRequest`] whose required fields are all present.
#[derive(Debug)]
pub struct EntryCheckout {
    pub amount: f64,
    pub entry_id: String,
    pub entry_number: i64,
}

impl EntryCheckoutRequest {
    /// All three fields are required and must be non-empty/non-zero.
    pub fn validated(self) -> Res<EntryCheckout> {
        match (self.amount, self.entry_id, self.entry_number) {
            (Some(amount), Some(entry_id), Some(entry_number))
                if amount > 0.0 && !entry_id.is_empty() && entry_number != 0 =>
            {
                Ok(EntryCheckout {
                    amount,
                    entry_id,
                    entry_number,
                })
            }
            _ => Err(AppError::Validation("Missing required fields".to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutSessionResponse {
    pub url: String,
}

/// Stripe charges in integer minor units. `f64::round` is
/// round-half-away-from-zero; amounts arrive with at most two decimals, so
/// this only cleans up float noise from the multiplication.
pub fn minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_convert_to_minor_units() {
        assert_eq!(minor_units(19.99), 1999);
        assert_eq!(minor_units(10.0), 1000);
        assert_eq!(minor_units(3550.00), 355000);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(minor_units(0.005), 1);
    }

    #[test]
    fn complete_requests_validate() {
        let req = EntryCheckoutRequest {
            amount: Some(19.99),
            entry_id: Some("e1".to_string()),
            entry_number: Some(7),
        };
        let entry = req.validated().unwrap();
        assert_eq!(entry.entry_id, "e1");
        assert_eq!(entry.entry_number, 7);
    }

    #[test]
    fn missing_entry_id_is_rejected() {
        let req = EntryCheckoutRequest {
            amount: Some(19.99),
            entry_number: Some(7),
            ..Default::default()
        };
        let err = req.validated().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn zero_amount_is_rejected() {
        let req = EntryCheckoutRequest {
            amount: Some(0.0),
            entry_id: Some("e1".to_string()),
            entry_number: Some(7),
        };
        assert!(req.validated().is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let req: EntryCheckoutRequest =
            serde_json::from_str(r#"{"amount":19.99,"entryId":"e1","entryNumber":7}"#).unwrap();
        assert_eq!(req.entry_id.as_deref(), Some("e1"));
        assert_eq!(req.entry_number, Some(7));
    }
}
