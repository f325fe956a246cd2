use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

use crate::core::tier::UnknownTier;
use crate::models::ErrorResponse;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Schedule window {start}..{end} must be ordered and span at most 366 days")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error(transparent)]
    UnknownTier(#[from] UnknownTier),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::InvalidWindow { .. } => "invalid_window",
            ApiError::UnknownTier(_) => "unknown_tier",
            ApiError::InvalidJson(_) => "invalid_json",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownTier(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}
