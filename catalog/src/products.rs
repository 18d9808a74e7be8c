use crate::{Product, PurchaseMode};

/// The deployed catalog. Items are never created or destroyed at runtime.
pub const PRODUCTS: &[Product] = &[
    Product {
        id: "prod_RoBE2gQb9MALCy",
        price_id: "price_1QuYsLDbqXbu8HsFepTQpix9",
        name: "W65 max mini Laser Spot Welder. 200W - Sky Blue",
        description: Some(
            "Professional mini laser spot welder with 200W power output in sky blue color",
        ),
        price: 3550.00,
        currency: "EUR",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RkQreEfKIpRsCx",
        price_id: "price_1QqvzyDbqXbu8HsF13yzgHWf",
        name: "Shipping charge",
        description: Some("Standard shipping fee for orders"),
        price: 11.49,
        currency: "EUR",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RkQpBvZv4b5JSM",
        price_id: "price_1Qqvy6DbqXbu8HsFhvQGrQJN",
        name: "Flareon VMAX Gift Box",
        description: Some("Pokemon Flareon VMAX Gift Box collection"),
        price: 169.50,
        currency: "EUR",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RZiHlrvDSFNsXq",
        price_id: "price_1QgYqbDbqXbu8HsF1Fctg4dp",
        name: "Pokemon SV06 Booster Box EAN: 820650877742 ASIN: B0CYB4XYZL",
        description: Some("Pokemon SV06 Booster Box - Official Trading Card Game"),
        price: 120.00,
        currency: "USD",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RZaIOTB8KANnKN",
        price_id: "price_1QgR7fDbqXbu8HsFnLb8H1iv",
        name: "SV02 Booster Box Case [second distro]",
        description: Some("Pokemon SV02 Booster Box Case - Second Distribution"),
        price: 750.00,
        currency: "EUR",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RZaHzoo7IHn0KX",
        price_id: "price_1QgR79DbqXbu8HsFh3mCY9MJ",
        name: "SV02 Booster Box Case",
        description: Some("Pokemon SV02 Booster Box Case - First Distribution"),
        price: 740.00,
        currency: "EUR",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RYB7KeEMvRJUWJ",
        price_id: "price_1Qf4lZDbqXbu8HsFoXUobn5m",
        name: "SV06 Booster Box",
        description: Some("Pokemon SV06 Booster Box - Single Box"),
        price: 120.00,
        currency: "USD",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RWHQMiVWqwCNyG",
        price_id: "price_1QdErBDbqXbu8HsFphOi6UPN",
        name: "SV05 Case (6 booster boxes)",
        description: Some("Pokemon SV05 Case containing 6 booster boxes"),
        price: 730.00,
        currency: "USD",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RWH6cLOPz2n5SW",
        price_id: "price_1QdEY6DbqXbu8HsFEv6YkXRW",
        name: "SV06 Case (6 booster boxes)",
        description: Some("Pokemon SV06 Case containing 6 booster boxes"),
        price: 720.00,
        currency: "USD",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_RNKjFUa5y7eXcA",
        price_id: "price_1QUa47DbqXbu8HsF6hkPd3M8",
        name: "Costco 151 collection",
        description: Some("Pokemon 151 collection available at Costco"),
        price: 73.00,
        currency: "EUR",
        mode: PurchaseMode::Payment,
    },
    Product {
        id: "prod_QwkDCjR0JW0i55",
        price_id: "price_1Q4qipDbqXbu8HsFi4wlgH5t",
        name: "Logo Design 3DPrintForce - full digital files",
        description: Some("Complete logo design package with full digital files for 3DPrintForce"),
        price: 100.00,
        currency: "USD",
        mode: PurchaseMode::Payment,
    },
];
