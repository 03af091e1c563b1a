//! Trade Error Types
//!
//! This module provides trade-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Trade-specific result type alias
pub type TradeResult<T> = Result<T, TradeError>;

/// Trade-specific error variants
#[derive(Debug, Error)]
pub enum TradeError {
    /// Product not found
    #[error("Product not found")]
    ProductNotFound,

    /// Buyer record not found
    #[error("Buyer not found")]
    BuyerNotFound,

    /// Buyer is the product owner
    #[error("You cannot buy your own listed product")]
    SelfDealing,

    /// A BuyInterest already exists for this (product, buyer) pair
    #[error("You have already expressed interest in this product")]
    DuplicateInterest,

    /// UPI payment without a transaction id
    #[error("Transaction ID is required for UPI payments")]
    MissingTransactionId,

    /// Request field validation failed
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TradeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TradeError::ProductNotFound | TradeError::BuyerNotFound => ErrorKind::NotFound,
            TradeError::SelfDealing
            | TradeError::MissingTransactionId
            | TradeError::Validation(_) => ErrorKind::BadRequest,
            TradeError::DuplicateInterest => ErrorKind::Conflict,
            TradeError::Database(_) | TradeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TradeError::Database(e) => {
                tracing::error!(error = %e, "Trade database error");
            }
            TradeError::Internal(msg) => {
                tracing::error!(message = %msg, "Trade internal error");
            }
            TradeError::SelfDealing => {
                tracing::warn!("Self-dealing attempt rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Trade error");
            }
        }
    }
}

impl IntoResponse for TradeError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for TradeError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            TradeError::Validation(err.message().to_string())
        } else {
            TradeError::Internal(err.to_string())
        }
    }
}

impl From<catalog::error::CatalogError> for TradeError {
    fn from(err: catalog::error::CatalogError) -> Self {
        TradeError::Internal(err.to_string())
    }
}

impl From<auth::error::AuthError> for TradeError {
    fn from(err: auth::error::AuthError) -> Self {
        TradeError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(TradeError::ProductNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(TradeError::BuyerNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(TradeError::SelfDealing.kind(), ErrorKind::BadRequest);
        assert_eq!(TradeError::DuplicateInterest.kind(), ErrorKind::Conflict);
        assert_eq!(
            TradeError::MissingTransactionId.kind(),
            ErrorKind::BadRequest
        );
    }
}
