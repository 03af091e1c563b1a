//! Order History Use Case
//!
//! Read-only projections: a buyer's purchases and a seller's sales,
//! newest first, each with the counterpart party's contact fields.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::OrderWithDetails;
use crate::domain::repository::OrderRepository;
use crate::error::TradeResult;

/// Order history use case
pub struct OrderHistoryUseCase<O>
where
    O: OrderRepository,
{
    orders: Arc<O>,
}

impl<O> OrderHistoryUseCase<O>
where
    O: OrderRepository,
{
    pub fn new(orders: Arc<O>) -> Self {
        Self { orders }
    }

    /// Orders placed by `buyer_id` (My Purchases)
    pub async fn purchases(&self, buyer_id: &UserId) -> TradeResult<Vec<OrderWithDetails>> {
        self.orders.list_by_buyer(buyer_id).await
    }

    /// Orders received by `seller_id` (My Sales)
    pub async fn sales(&self, seller_id: &UserId) -> TradeResult<Vec<OrderWithDetails>> {
        self.orders.list_by_seller(seller_id).await
    }
}
