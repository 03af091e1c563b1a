//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{BuyInterestId, OrderId, ProductId, UserId};

use crate::domain::value_objects::{OrderStatus, PaymentMethod};

// ============================================================================
// Buy Interest
// ============================================================================

/// A buyer's non-binding intent to purchase a listing
///
/// At most one per (product, buyer) pair - enforced by a unique index.
#[derive(Debug, Clone)]
pub struct BuyInterest {
    pub buy_interest_id: BuyInterestId,
    pub product_id: ProductId,
    pub buyer_id: UserId,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl BuyInterest {
    pub fn new(product_id: ProductId, buyer_id: UserId, payment_method: PaymentMethod) -> Self {
        Self {
            buy_interest_id: BuyInterestId::new(),
            product_id,
            buyer_id,
            payment_method,
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// Order
// ============================================================================

/// Buyer contact details captured when the order is placed
///
/// A snapshot: later edits to the user profile never rewrite it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A finalized purchase record
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub buyer_id: UserId,
    /// Denormalized from the product owner at creation time
    pub seller_id: UserId,
    pub payment_method: PaymentMethod,
    /// Present iff the payment method is UPI
    pub transaction_id: Option<String>,
    pub status: OrderStatus,
    pub buyer_contact: BuyerContact,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order
    ///
    /// The transaction id is retained only for UPI payments; for Cash on
    /// Delivery any supplied value is dropped.
    pub fn new(
        product_id: ProductId,
        buyer_id: UserId,
        seller_id: UserId,
        payment_method: PaymentMethod,
        transaction_id: Option<String>,
        buyer_contact: BuyerContact,
    ) -> Self {
        let now = Utc::now();

        let transaction_id = if payment_method.requires_transaction_id() {
            transaction_id
        } else {
            None
        };

        Self {
            order_id: OrderId::new(),
            product_id,
            buyer_id,
            seller_id,
            payment_method,
            transaction_id,
            status: OrderStatus::Pending,
            buyer_contact,
            order_date: now,
            created_at: now,
            updated_at: now,
        }
    }
}

// ============================================================================
// Enriched projections
// ============================================================================

/// Product fields shown on interest and order views
#[derive(Debug, Clone)]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub title: String,
    pub price: i64,
    pub image_url: String,
}

/// A counterpart party's public contact fields
#[derive(Debug, Clone)]
pub struct PartyContact {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Buy interest enriched for the seller's review screen
#[derive(Debug, Clone)]
pub struct InterestWithDetails {
    pub interest: BuyInterest,
    pub product: ProductSummary,
    pub buyer: PartyContact,
}

/// Order enriched with the product and the counterpart party
#[derive(Debug, Clone)]
pub struct OrderWithDetails {
    pub order: Order,
    pub product: ProductSummary,
    /// Seller on purchase views, buyer on sales views
    pub counterpart: PartyContact,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> BuyerContact {
        BuyerContact {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::new(
            ProductId::new(),
            UserId::new(),
            UserId::new(),
            PaymentMethod::Upi,
            Some("TXN123".to_string()),
            contact(),
        );

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.transaction_id.as_deref(), Some("TXN123"));
        assert_eq!(order.order_date, order.created_at);
    }

    #[test]
    fn test_transaction_id_dropped_for_cash_on_delivery() {
        let order = Order::new(
            ProductId::new(),
            UserId::new(),
            UserId::new(),
            PaymentMethod::CashOnDelivery,
            Some("TXN123".to_string()),
            contact(),
        );

        assert!(order.transaction_id.is_none());
    }

    #[test]
    fn test_contact_snapshot_is_copied() {
        let snapshot = contact();
        let order = Order::new(
            ProductId::new(),
            UserId::new(),
            UserId::new(),
            PaymentMethod::CashOnDelivery,
            None,
            snapshot.clone(),
        );

        assert_eq!(order.buyer_contact, snapshot);
    }
}
