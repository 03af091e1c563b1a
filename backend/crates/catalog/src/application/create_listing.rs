//! Create Listing Use Case
//!
//! Persists a new product listing owned by the requester.
//!
//! Image upload and product creation are two separate requests, so a
//! failed insert would leave an orphaned upload behind. The use case
//! compensates by deleting the referenced file when the insert fails.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::CatalogConfig;
use crate::domain::entities::Product;
use crate::domain::repository::{ImageStore, ProductRepository};
use crate::domain::value_objects::{Price, UpiId};
use crate::error::{CatalogError, CatalogResult};

/// Create listing input
pub struct CreateListingInput {
    pub title: String,
    pub price: i64,
    pub description: String,
    pub category: String,
    pub upi_id: String,
    pub image_url: String,
}

/// Create listing use case
pub struct CreateListingUseCase<P, I>
where
    P: ProductRepository,
    I: ImageStore,
{
    products: Arc<P>,
    images: Arc<I>,
    config: Arc<CatalogConfig>,
}

impl<P, I> CreateListingUseCase<P, I>
where
    P: ProductRepository,
    I: ImageStore,
{
    pub fn new(products: Arc<P>, images: Arc<I>, config: Arc<CatalogConfig>) -> Self {
        Self {
            products,
            images,
            config,
        }
    }

    pub async fn execute(
        &self,
        owner_id: UserId,
        input: CreateListingInput,
    ) -> CatalogResult<Product> {
        let title = required(input.title, "Title is required")?;
        let description = required(input.description, "Description is required")?;
        let category = required(input.category, "Category is required")?;
        let image_url = required(input.image_url, "Image is required")?;

        let price = Price::new(input.price)?;
        let upi_id = UpiId::new(input.upi_id)?;

        let product = Product::new(
            owner_id,
            title,
            price,
            description,
            category,
            upi_id,
            image_url,
        );

        match self.products.create(&product).await {
            Ok(()) => {
                tracing::info!(
                    product_id = %product.product_id,
                    owner_id = %owner_id,
                    category = %product.category,
                    "Product listed"
                );
                Ok(product)
            }
            Err(e) => {
                // Failed insert must not leave the upload orphaned
                if let Some(filename) = self.config.filename_from_url(&product.image_url) {
                    if let Err(cleanup_err) = self.images.remove(filename).await {
                        tracing::warn!(
                            error = %cleanup_err,
                            filename = %filename,
                            "Orphaned upload cleanup failed"
                        );
                    }
                }
                Err(e)
            }
        }
    }
}

fn required(value: String, message: &str) -> CatalogResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(CatalogError::Validation(message.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        assert!(required("  ".to_string(), "Title is required").is_err());
        assert_eq!(
            required(" Toys ".to_string(), "Category is required").unwrap(),
            "Toys"
        );
    }
}
