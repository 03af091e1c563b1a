//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product not found
    #[error("Product not found")]
    ProductNotFound,

    /// Requester is not the product owner
    #[error("You do not own this product")]
    NotOwner,

    /// Product has already been marked sold
    #[error("Product is already sold")]
    AlreadySold,

    /// Stored image not found
    #[error("Image not found")]
    ImageNotFound,

    /// Uploaded image rejected (missing, oversized, bad type, bad name)
    #[error("{0}")]
    InvalidImage(String),

    /// Request field validation failed
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Image storage I/O error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::ProductNotFound | CatalogError::ImageNotFound => ErrorKind::NotFound,
            CatalogError::NotOwner => ErrorKind::Forbidden,
            CatalogError::AlreadySold => ErrorKind::Conflict,
            CatalogError::InvalidImage(_) | CatalogError::Validation(_) => ErrorKind::BadRequest,
            CatalogError::Database(_) | CatalogError::Storage(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Storage(msg) => {
                tracing::error!(message = %msg, "Image storage error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::NotOwner => {
                tracing::warn!("Ownership check failed on mark-sold");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            CatalogError::Validation(err.message().to_string())
        } else {
            CatalogError::Internal(err.to_string())
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(CatalogError::ProductNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(CatalogError::NotOwner.kind(), ErrorKind::Forbidden);
        assert_eq!(CatalogError::AlreadySold.kind(), ErrorKind::Conflict);
        assert_eq!(CatalogError::ImageNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            CatalogError::Validation("bad".into()).kind(),
            ErrorKind::BadRequest
        );
    }
}
