//! Express Interest Use Case
//!
//! Records a buyer's intent to purchase a listing. Idempotent-rejection:
//! a second interest for the same (product, buyer) pair is a conflict,
//! not a merge.

use std::sync::Arc;

use catalog::domain::repository::ProductRepository;
use kernel::id::{ProductId, UserId};

use crate::domain::entities::BuyInterest;
use crate::domain::repository::BuyInterestRepository;
use crate::domain::value_objects::PaymentMethod;
use crate::error::{TradeError, TradeResult};

/// Express interest use case
pub struct ExpressInterestUseCase<P, B>
where
    P: ProductRepository,
    B: BuyInterestRepository,
{
    products: Arc<P>,
    interests: Arc<B>,
}

impl<P, B> ExpressInterestUseCase<P, B>
where
    P: ProductRepository,
    B: BuyInterestRepository,
{
    pub fn new(products: Arc<P>, interests: Arc<B>) -> Self {
        Self {
            products,
            interests,
        }
    }

    pub async fn execute(
        &self,
        buyer_id: UserId,
        product_id: ProductId,
        payment_method: PaymentMethod,
    ) -> TradeResult<BuyInterest> {
        let product = self
            .products
            .find_by_id(&product_id)
            .await?
            .ok_or(TradeError::ProductNotFound)?;

        if product.owner_id == buyer_id {
            return Err(TradeError::SelfDealing);
        }

        let interest = BuyInterest::new(product_id, buyer_id, payment_method);

        // Duplicate (product, buyer) pairs are rejected by the unique index
        self.interests.create(&interest).await?;

        tracing::info!(
            buy_interest_id = %interest.buy_interest_id,
            product_id = %product_id,
            buyer_id = %buyer_id,
            payment_method = %payment_method,
            "Buy interest recorded"
        );

        Ok(interest)
    }
}
