//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entities::{BuyInterest, InterestWithDetails, Order, OrderWithDetails};
use crate::error::TradeResult;

/// Buy interest repository trait
#[trait_variant::make(BuyInterestRepository: Send)]
pub trait LocalBuyInterestRepository {
    /// Create a new buy interest
    ///
    /// The unique (product, buyer) index is the authority: a duplicate
    /// surfaces as `DuplicateInterest`, even under concurrent requests.
    async fn create(&self, interest: &BuyInterest) -> TradeResult<()>;

    /// All interests on products owned by `seller_id`, newest first,
    /// enriched with product and buyer details
    async fn list_for_seller(&self, seller_id: &UserId) -> TradeResult<Vec<InterestWithDetails>>;
}

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Create a new order
    async fn create(&self, order: &Order) -> TradeResult<()>;

    /// A buyer's purchases, order date descending, enriched with the seller
    async fn list_by_buyer(&self, buyer_id: &UserId) -> TradeResult<Vec<OrderWithDetails>>;

    /// A seller's sales, order date descending, enriched with the buyer
    async fn list_by_seller(&self, seller_id: &UserId) -> TradeResult<Vec<OrderWithDetails>>;
}
