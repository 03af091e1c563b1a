//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email is already registered
    #[error("User already exists with this email")]
    EmailTaken,

    /// Invalid credentials (unknown email or wrong password - same message
    /// for both, so login failures don't reveal which emails exist)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, invalid, or expired bearer token
    #[error("Please authenticate")]
    Unauthenticated,

    /// User not found
    #[error("User not found")]
    UserNotFound,

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

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthenticated => {
                tracing::warn!("Rejected unauthenticated request");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        // Value-object validation surfaces as 400; anything else is internal
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AuthError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            AuthError::InvalidCredentials.kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(AuthError::Unauthenticated.kind(), ErrorKind::Unauthorized);
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            AuthError::Validation("bad".into()).kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_invalid_credentials_generic_message() {
        // Unknown email and wrong password must be indistinguishable
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::Validation(_)));

        let err: AuthError = AppError::internal("boom").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
