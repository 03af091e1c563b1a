//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{ProductId, UserId};

use crate::domain::value_objects::{Price, UpiId};

/// Product listing entity
///
/// Two-state machine per product: `Active -> Sold` (terminal), gated
/// solely by the owner. `sold_to` is set iff `is_sold` is true; the
/// products table enforces the same coupling with a CHECK constraint.
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    /// Listing owner (seller)
    pub owner_id: UserId,
    pub title: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    /// Serving URL of the listing image
    pub image_url: String,
    /// Seller's UPI payment address
    pub upi_id: UpiId,
    pub is_sold: bool,
    /// Buyer chosen by the owner at the sold transition
    pub sold_to: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new active (unsold) listing
    pub fn new(
        owner_id: UserId,
        title: String,
        price: Price,
        description: String,
        category: String,
        upi_id: UpiId,
        image_url: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            product_id: ProductId::new(),
            owner_id,
            title,
            price,
            description,
            category,
            image_url,
            upi_id,
            is_sold: false,
            sold_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the listing can still be bought
    pub fn is_available(&self) -> bool {
        !self.is_sold
    }
}

/// Owner's public profile fields, used to enrich listing views
#[derive(Debug, Clone)]
pub struct OwnerSummary {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// A listing joined with its owner's public profile
#[derive(Debug, Clone)]
pub struct ProductWithOwner {
    pub product: Product,
    pub owner: OwnerSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Product {
        Product::new(
            UserId::new(),
            "Wooden train set".to_string(),
            Price::new(500).unwrap(),
            "Lightly used".to_string(),
            "Toys".to_string(),
            UpiId::new("seller@upi").unwrap(),
            "/api/products/image/abc.png".to_string(),
        )
    }

    #[test]
    fn test_new_listing_is_active() {
        let product = listing();
        assert!(!product.is_sold);
        assert!(product.sold_to.is_none());
        assert!(product.is_available());
    }

    #[test]
    fn test_sold_coupling() {
        let mut product = listing();
        product.is_sold = true;
        product.sold_to = Some(UserId::new());
        assert!(!product.is_available());
        // is_sold and sold_to move together
        assert_eq!(product.is_sold, product.sold_to.is_some());
    }
}
