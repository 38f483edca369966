use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// The underlying driver error is logged at the store layer; the
    /// response body never carries it.
    #[error("Internal Server Error: the store is unavailable")]
    StoreUnavailable,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::Validation(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": match *self {
                ApiError::Validation(..) => "VALIDATION_ERROR",
                ApiError::NotFound(..) => "NOT_FOUND_ERROR",
                ApiError::StoreUnavailable => "INTERNAL_SERVER_ERROR",
            },
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}
