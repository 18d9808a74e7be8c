use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

/// Any origin may call the checkout endpoints; only the listed headers are
/// allowed through.
pub fn middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
        .max_age(3600)
}
