//! Browse Listings Use Case
//!
//! Read-only projections over the product catalog.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::ProductWithOwner;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

/// Browse listings use case
pub struct BrowseListingsUseCase<P>
where
    P: ProductRepository,
{
    products: Arc<P>,
}

impl<P> BrowseListingsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(products: Arc<P>) -> Self {
        Self { products }
    }

    /// All listings, newest first, optionally filtered by exact category
    pub async fn list(&self, category: Option<&str>) -> CatalogResult<Vec<ProductWithOwner>> {
        // Blank filter means no filter
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.products.list(category).await
    }

    /// One owner's listings, newest first
    pub async fn list_by_owner(&self, owner_id: &UserId) -> CatalogResult<Vec<ProductWithOwner>> {
        self.products.list_by_owner(owner_id).await
    }
}
