//! Domain Value Objects

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// Payment Method
// ============================================================================

/// How the buyer intends to pay
///
/// Serialized exactly as the mobile client sends it: `"UPI"` or
/// `"Cash on Delivery"`. The same strings are stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum PaymentMethod {
    #[serde(rename = "UPI")]
    #[display("UPI")]
    Upi,
    #[serde(rename = "Cash on Delivery")]
    #[display("Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Database / wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Parse a database value
    pub fn from_db(value: &str) -> AppResult<Self> {
        match value {
            "UPI" => Ok(PaymentMethod::Upi),
            "Cash on Delivery" => Ok(PaymentMethod::CashOnDelivery),
            other => Err(AppError::internal(format!(
                "Unknown payment method in database: {}",
                other
            ))),
        }
    }

    /// A transaction id is required iff the payment is UPI
    pub fn requires_transaction_id(&self) -> bool {
        matches!(self, PaymentMethod::Upi)
    }
}

// ============================================================================
// Order Status
// ============================================================================

/// Order fulfillment lifecycle
///
/// `Pending -> Confirmed -> Shipped -> Delivered`, or `Cancelled` from any
/// non-terminal state. Status mutation itself is a downstream fulfillment
/// concern; the type only encodes which moves are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum OrderStatus {
    #[display("Pending")]
    Pending,
    #[display("Confirmed")]
    Confirmed,
    #[display("Shipped")]
    Shipped,
    #[display("Delivered")]
    Delivered,
    #[display("Cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// Database / wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a database value
    pub fn from_db(value: &str) -> AppResult<Self> {
        match value {
            "Pending" => Ok(OrderStatus::Pending),
            "Confirmed" => Ok(OrderStatus::Confirmed),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(AppError::internal(format!(
                "Unknown order status in database: {}",
                other
            ))),
        }
    }

    /// Whether no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether the fulfillment flow allows moving to `next`
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        if next == OrderStatus::Cancelled {
            return true;
        }
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Confirmed, OrderStatus::Shipped)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_serde_strings() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Upi).unwrap(),
            r#""UPI""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            r#""Cash on Delivery""#
        );

        let parsed: PaymentMethod = serde_json::from_str(r#""Cash on Delivery""#).unwrap();
        assert_eq!(parsed, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_payment_method_db_roundtrip() {
        for method in [PaymentMethod::Upi, PaymentMethod::CashOnDelivery] {
            assert_eq!(PaymentMethod::from_db(method.as_str()).unwrap(), method);
        }
        assert!(PaymentMethod::from_db("Barter").is_err());
    }

    #[test]
    fn test_transaction_id_required_only_for_upi() {
        assert!(PaymentMethod::Upi.requires_transaction_id());
        assert!(!PaymentMethod::CashOnDelivery.requires_transaction_id());
    }

    #[test]
    fn test_order_status_happy_path() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Shipped));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn test_order_status_cancellation() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_order_status_illegal_moves() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Shipped));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Confirmed));
    }

    #[test]
    fn test_terminal_states_are_final() {
        for next in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(!OrderStatus::Delivered.can_transition_to(next));
            assert!(!OrderStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_order_status_db_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_db(status.as_str()).unwrap(), status);
        }
        assert!(OrderStatus::from_db("Lost").is_err());
    }
}
