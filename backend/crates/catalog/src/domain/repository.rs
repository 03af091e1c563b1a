//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{ProductId, UserId};

use crate::domain::entities::{Product, ProductWithOwner};
use crate::error::CatalogResult;

/// Result of the atomic mark-sold write
///
/// The transition statement itself is conditional; this enum carries the
/// classification of why no row was updated.
#[derive(Debug)]
pub enum MarkSoldOutcome {
    /// Transition happened; the updated product
    Sold(Product),
    /// Product does not exist
    NotFound,
    /// Requester is not the owner
    NotOwner,
    /// Product was already sold (possibly by a concurrent request)
    AlreadySold,
}

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Create a new product listing
    async fn create(&self, product: &Product) -> CatalogResult<()>;

    /// Find product by ID
    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>>;

    /// List all products, optionally filtered by exact category, newest
    /// first, enriched with the owner's public profile
    async fn list(&self, category: Option<&str>) -> CatalogResult<Vec<ProductWithOwner>>;

    /// Same as `list`, scoped to one owner
    async fn list_by_owner(&self, owner_id: &UserId) -> CatalogResult<Vec<ProductWithOwner>>;

    /// Atomically transition a product to sold
    ///
    /// Single conditional UPDATE predicated on `is_sold = FALSE` and the
    /// requester being the owner - never a read-check-then-write.
    async fn mark_sold(
        &self,
        product_id: &ProductId,
        requester_id: &UserId,
        buyer_id: &UserId,
    ) -> CatalogResult<MarkSoldOutcome>;
}

/// Image store trait
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Persist image bytes, returning the server-generated filename
    async fn save(&self, extension: &str, bytes: &[u8]) -> CatalogResult<String>;

    /// Load image bytes by filename (None when absent)
    async fn load(&self, filename: &str) -> CatalogResult<Option<Vec<u8>>>;

    /// Remove an image; returns whether a file was deleted
    async fn remove(&self, filename: &str) -> CatalogResult<bool>;
}
