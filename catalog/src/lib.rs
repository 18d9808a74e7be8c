use serde::{Deserialize, Serialize};

mod format;
mod products;

pub use format::{format_minor_units, format_price};
pub use products::PRODUCTS;

/// How a product is charged when it goes through checkout.
/// Wire names match the payments provider's session modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseMode {
    Payment,
    Subscription,
}

/// A purchasable item, fixed at deploy time.
///
/// `price` and `currency` are display-derived only; the authoritative charge
/// amount is always what the payments provider records for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Product {
    pub id: &'static str,
    /// Opaque reference to the pre-configured price object at the provider.
    pub price_id: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub price: f64,
    pub currency: &'static str,
    pub mode: PurchaseMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TradingCards,
    Equipment,
    Services,
    DigitalServices,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::TradingCards => "Pokemon Cards",
            Category::Equipment => "Tools & Equipment",
            Category::Services => "Services",
            Category::DigitalServices => "Digital Services",
            Category::Other => "Other Products",
        }
    }
}

impl Product {
    /// Keyword classification used to group the catalog grid.
    pub fn category(&self) -> Category {
        let name = self.name.to_lowercase();

        if name.contains("pokemon")
            || name.contains("sv0")
            || name.contains("booster")
            || name.contains("flareon")
            || name.contains("151")
        {
            return Category::TradingCards;
        }
        if name.contains("welder") || name.contains("laser") {
            return Category::Equipment;
        }
        if name.contains("shipping") {
            return Category::Services;
        }
        if name.contains("logo") || name.contains("design") {
            return Category::DigitalServices;
        }

        Category::Other
    }
}

/// Looks a product up by its catalog identifier.
pub fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

/// Looks a product up by the provider price it is sold under.
pub fn product_by_price_id(price_id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.price_id == price_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_price_id_lookups_agree() {
        for product in PRODUCTS {
            let by_id = product_by_id(product.id).expect("product listed by id");
            let by_price = product_by_price_id(by_id.price_id).expect("product listed by price id");
            assert_eq!(by_price, product);
        }
    }

    #[test]
    fn unknown_ids_are_absent_not_errors() {
        assert!(product_by_id("prod_missing").is_none());
        assert!(product_by_price_id("price_missing").is_none());
    }

    #[test]
    fn purchase_mode_uses_provider_wire_names() {
        assert_eq!(
            serde_json::to_string(&PurchaseMode::Payment).unwrap(),
            "\"payment\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseMode::Subscription).unwrap(),
            "\"subscription\""
        );
    }

    #[test]
    fn catalog_groups_by_name_keywords() {
        let welder = product_by_id("prod_RoBE2gQb9MALCy").unwrap();
        assert_eq!(welder.category(), Category::Equipment);

        let shipping = product_by_id("prod_RkQreEfKIpRsCx").unwrap();
        assert_eq!(shipping.category(), Category::Services);

        let booster = product_by_id("prod_RZiHlrvDSFNsXq").unwrap();
        assert_eq!(booster.category(), Category::TradingCards);

        let logo = product_by_id("prod_QwkDCjR0JW0i55").unwrap();
        assert_eq!(logo.category(), Category::DigitalServices);
    }

    #[test]
    fn categories_carry_display_labels() {
        assert_eq!(Category::TradingCards.label(), "Pokemon Cards");
        assert_eq!(Category::Other.label(), "Other Products");
    }
}
