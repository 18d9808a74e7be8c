use actix_web::HttpResponse;
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Stripe(#[from] stripe::StripeError),

    // === APPLICATION ERRORS ===
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    CheckoutFailed(String),

    #[error("No checkout URL received")]
    NoRedirectUrl,

    #[error("{0}")]
    Query(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_json = |err_msg: &str| {
            if is_dev {
                serde_json::json!({ "error": err_msg })
            } else {
                serde_json::json!({ "error": "Internal server error" })
            }
        };

        match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Jwt(error) => {
                log::error!("JWT error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            AppError::Reqwest(error) => {
                log::error!("Reqwest error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
            // The payments provider's message goes back to the caller verbatim;
            // the caller decides whether to retry.
            AppError::Stripe(error) => {
                log::error!("Stripe error: {}", error);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": error.to_string() }))
            }

            // === APPLICATION ERRORS ===
            AppError::Unauthenticated(_) => {
                HttpResponse::Unauthorized().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::Validation(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::Configuration(error) => {
                log::error!("Configuration error: {}", error);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::CheckoutFailed(_) | AppError::NoRedirectUrl => {
                HttpResponse::BadGateway().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::Query(error) => {
                log::error!("Query error: {}", error);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError().json(to_internal_json(&error.to_string()))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;

    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Validation("Missing required fields".to_string());
        assert_eq!(err.error_response().status().as_u16(), 400);
    }

    #[test]
    fn unauthenticated_maps_to_unauthorized() {
        let err = AppError::Unauthenticated("Please sign in to make a purchase".to_string());
        assert_eq!(err.error_response().status().as_u16(), 401);
    }

    #[test]
    fn configuration_maps_to_internal_server_error() {
        let err = AppError::Configuration("Missing Stripe secret key".to_string());
        assert_eq!(err.error_response().status().as_u16(), 500);
    }

    #[test]
    fn checkout_failures_keep_their_message() {
        let err = AppError::CheckoutFailed("bad price".to_string());
        assert_eq!(err.to_string(), "bad price");
        assert_eq!(err.error_response().status().as_u16(), 502);
    }

    #[test]
    fn missing_redirect_url_has_fixed_message() {
        assert_eq!(AppError::NoRedirectUrl.to_string(), "No checkout URL received");
    }
}
