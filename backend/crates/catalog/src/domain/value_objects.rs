//! Domain Value Objects

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum accepted UPI id length
const UPI_MAX_LENGTH: usize = 64;

// ============================================================================
// Price
// ============================================================================

/// Listing price - a positive integer amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(i64);

impl Price {
    /// Create a new price with validation
    pub fn new(amount: i64) -> AppResult<Self> {
        if amount <= 0 {
            return Err(AppError::bad_request("Price must be a positive number"));
        }
        Ok(Self(amount))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount
    pub fn amount(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// UPI Id
// ============================================================================

/// Seller's UPI payment address (e.g., `name@bank`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpiId(String);

impl UpiId {
    /// Create a new UPI id with validation
    pub fn new(upi_id: impl Into<String>) -> AppResult<Self> {
        let upi_id = upi_id.into().trim().to_string();

        if upi_id.is_empty() {
            return Err(AppError::bad_request("UPI ID is required"));
        }

        if upi_id.len() > UPI_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "UPI ID must be at most {} characters",
                UPI_MAX_LENGTH
            )));
        }

        // The handle@provider form always carries an @
        if !upi_id.contains('@') {
            return Err(AppError::bad_request(
                "Please enter a valid UPI ID (must contain @)",
            ));
        }

        Ok(Self(upi_id))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(upi_id: impl Into<String>) -> Self {
        Self(upi_id.into())
    }

    /// Get the UPI id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UpiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_positive() {
        assert_eq!(Price::new(500).unwrap().amount(), 500);
        assert_eq!(Price::new(1).unwrap().amount(), 1);
    }

    #[test]
    fn test_price_rejects_non_positive() {
        assert!(Price::new(0).is_err());
        assert!(Price::new(-10).is_err());
    }

    #[test]
    fn test_upi_id_valid() {
        assert!(UpiId::new("seller@upi").is_ok());
        assert!(UpiId::new("name.surname@okbank").is_ok());
    }

    #[test]
    fn test_upi_id_invalid() {
        assert!(UpiId::new("").is_err());
        assert!(UpiId::new("selleratupi").is_err()); // no @
        assert!(UpiId::new("a".repeat(UPI_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_upi_id_trims() {
        let upi = UpiId::new("  seller@upi  ").unwrap();
        assert_eq!(upi.as_str(), "seller@upi");
    }
}
