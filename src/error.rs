//! Error handling for the engine

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::availability::services::DateValidationError;
use crate::pricing::services::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("{0}")]
    Validation(String),
}

impl From<DateValidationError> for AppError {
    fn from(err: DateValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// JSON error body returned to the PMS
#[derive(Debug, Serialize)]
struct ErrorBody {
    error_type: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }
            AppError::Pricing(PricingError::InvalidDateRange) => (
                StatusCode::BAD_REQUEST,
                "invalid_date_range",
                self.to_string(),
            ),
            AppError::Pricing(PricingError::RatePlanNotFound) => (
                StatusCode::NOT_FOUND,
                "rate_plan_not_found",
                self.to_string(),
            ),
            AppError::Pricing(PricingError::RateNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "rate_not_found", self.to_string())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
        };

        (status, Json(ErrorBody { error_type, message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
