use middleware::extractor::ExtractionMiddleware;

pub mod middleware {
    pub mod extractor;
}

/// Validates the bearer token on every request and stores the decoded
/// claims in the request extensions for the view handlers to read.
pub fn middleware() -> ExtractionMiddleware {
    ExtractionMiddleware::new()
}
