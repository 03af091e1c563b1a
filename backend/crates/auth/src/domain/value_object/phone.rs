//! Phone Value Object
//!
//! Contact phone number with light structural validation. The number is
//! shown to trade counterparties as-is, so formatting is preserved.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Minimum digits a phone number must contain
const PHONE_MIN_DIGITS: usize = 7;

/// Maximum total length
const PHONE_MAX_LENGTH: usize = 20;

/// Phone number value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number with validation
    pub fn new(phone: impl Into<String>) -> AppResult<Self> {
        let phone = phone.into().trim().to_string();

        if phone.is_empty() {
            return Err(AppError::bad_request("Phone number cannot be empty"));
        }

        if phone.len() > PHONE_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Phone number must be at most {} characters",
                PHONE_MAX_LENGTH
            )));
        }

        // Digits plus common formatting characters
        if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
        {
            return Err(AppError::bad_request(
                "Phone number contains invalid characters",
            ));
        }

        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < PHONE_MIN_DIGITS {
            return Err(AppError::bad_request(format!(
                "Phone number must contain at least {} digits",
                PHONE_MIN_DIGITS
            )));
        }

        Ok(Self(phone))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        assert!(Phone::new("9876543210").is_ok());
        assert!(Phone::new("+91 98765 43210").is_ok());
        assert!(Phone::new("(022) 1234-5678").is_ok());
    }

    #[test]
    fn test_phone_invalid() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("12345").is_err()); // too few digits
        assert!(Phone::new("call-me-maybe").is_err());
        assert!(Phone::new("1".repeat(PHONE_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_phone_trims_whitespace() {
        let phone = Phone::new("  9876543210  ").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }
}
