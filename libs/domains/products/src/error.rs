use axum::response::{IntoResponse, Response};
use axum_helpers::{errors::responses::messages, AppError};
use mongodb::bson::oid::ObjectId;
use std::time::Duration;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ObjectId),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage operation '{operation}' timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses.
///
/// Storage failures and timeouts collapse into one opaque 500; the cause is
/// only logged.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id.to_hex()))
            }
            ProductError::Validation(e) => AppError::ValidationError(e),
            ProductError::Database(msg) => {
                tracing::error!(cause = %msg, "Product storage operation failed");
                AppError::InternalServerError(messages::INTERNAL_ERROR.to_string())
            }
            ProductError::Timeout { operation, timeout } => {
                tracing::error!(operation, ?timeout, "Product storage operation timed out");
                AppError::InternalServerError(messages::INTERNAL_ERROR.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ProductError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ProductError::Database(format!("failed to encode document: {}", err))
    }
}
