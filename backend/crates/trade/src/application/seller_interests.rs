//! Seller Interests Use Case
//!
//! The seller's view of who wants to buy their listings - used to pick a
//! buyer before calling mark-sold.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::InterestWithDetails;
use crate::domain::repository::BuyInterestRepository;
use crate::error::TradeResult;

/// Seller interests use case
pub struct SellerInterestsUseCase<B>
where
    B: BuyInterestRepository,
{
    interests: Arc<B>,
}

impl<B> SellerInterestsUseCase<B>
where
    B: BuyInterestRepository,
{
    pub fn new(interests: Arc<B>) -> Self {
        Self { interests }
    }

    pub async fn execute(&self, seller_id: &UserId) -> TradeResult<Vec<InterestWithDetails>> {
        self.interests.list_for_seller(seller_id).await
    }
}
