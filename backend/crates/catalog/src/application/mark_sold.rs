//! Mark Sold Use Case
//!
//! The only state transition in the catalog: `Active -> Sold`, gated
//! solely by the owner, recording the chosen buyer. Terminal - a second
//! call fails with a conflict.

use std::sync::Arc;

use kernel::id::{ProductId, UserId};

use crate::domain::entities::Product;
use crate::domain::repository::{MarkSoldOutcome, ProductRepository};
use crate::error::{CatalogError, CatalogResult};

/// Mark sold use case
pub struct MarkSoldUseCase<P>
where
    P: ProductRepository,
{
    products: Arc<P>,
}

impl<P> MarkSoldUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(products: Arc<P>) -> Self {
        Self { products }
    }

    pub async fn execute(
        &self,
        product_id: &ProductId,
        requester_id: &UserId,
        buyer_id: &UserId,
    ) -> CatalogResult<Product> {
        let outcome = self
            .products
            .mark_sold(product_id, requester_id, buyer_id)
            .await?;

        match outcome {
            MarkSoldOutcome::Sold(product) => {
                tracing::info!(
                    product_id = %product.product_id,
                    seller_id = %requester_id,
                    buyer_id = %buyer_id,
                    "Product marked sold"
                );
                Ok(product)
            }
            MarkSoldOutcome::NotFound => Err(CatalogError::ProductNotFound),
            MarkSoldOutcome::NotOwner => Err(CatalogError::NotOwner),
            MarkSoldOutcome::AlreadySold => Err(CatalogError::AlreadySold),
        }
    }
}
