//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{OwnerSummary, Product, ProductWithOwner};

// ============================================================================
// Create Product
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub title: String,
    pub price: i64,
    pub description: String,
    pub category: String,
    pub upi_id: String,
    pub image_url: String,
}

// ============================================================================
// Mark Sold
// ============================================================================

/// Mark sold request - the buyer chosen by the seller
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkSoldRequest {
    pub buyer_id: Uuid,
}

/// Mark sold response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkSoldResponse {
    pub product: ProductResponse,
}

// ============================================================================
// Product views
// ============================================================================

/// Owner public profile fields on enriched listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Product listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub title: String,
    pub price: i64,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub upi_id: String,
    pub is_sold: bool,
    pub sold_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    /// Present on browse views, absent on create/mark-sold responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerResponse>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: *product.product_id.as_uuid(),
            title: product.title.clone(),
            price: product.price.amount(),
            description: product.description.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            upi_id: product.upi_id.as_str().to_string(),
            is_sold: product.is_sold,
            sold_to: product.sold_to.map(|id| *id.as_uuid()),
            created_at: product.created_at,
            owner: None,
        }
    }
}

impl From<&ProductWithOwner> for ProductResponse {
    fn from(entry: &ProductWithOwner) -> Self {
        let mut response = ProductResponse::from(&entry.product);
        response.owner = Some(OwnerResponse::from(&entry.owner));
        response
    }
}

impl From<&OwnerSummary> for OwnerResponse {
    fn from(owner: &OwnerSummary) -> Self {
        Self {
            id: *owner.user_id.as_uuid(),
            name: owner.name.clone(),
            email: owner.email.clone(),
        }
    }
}

// ============================================================================
// Image upload
// ============================================================================

/// Upload response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
}

// ============================================================================
// Query params
// ============================================================================

/// Listing filter
#[derive(Debug, Clone, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Price, UpiId};
    use kernel::id::UserId;

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
    fn test_product_response_camel_case() {
        let response = ProductResponse::from(&listing());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["title"], "Wooden train set");
        assert_eq!(json["price"], 500);
        assert_eq!(json["isSold"], false);
        assert_eq!(json["upiId"], "seller@upi");
        assert_eq!(json["imageUrl"], "/api/products/image/abc.png");
        // owner omitted when not enriched
        assert!(json.get("owner").is_none());
    }

    #[test]
    fn test_enriched_response_carries_owner() {
        let product = listing();
        let entry = ProductWithOwner {
            owner: OwnerSummary {
                user_id: product.owner_id,
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
            },
            product,
        };

        let json = serde_json::to_value(ProductResponse::from(&entry)).unwrap();
        assert_eq!(json["owner"]["name"], "Ravi");
        assert_eq!(json["owner"]["email"], "ravi@example.com");
    }
}
