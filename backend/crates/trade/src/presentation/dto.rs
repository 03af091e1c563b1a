//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    BuyInterest, InterestWithDetails, Order, OrderWithDetails, PartyContact, ProductSummary,
};
use crate::domain::value_objects::{OrderStatus, PaymentMethod};

// ============================================================================
// Buy Interests
// ============================================================================

/// Express interest request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterestRequest {
    pub product_id: Uuid,
    pub payment_method: PaymentMethod,
}

/// Newly recorded buy interest
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub buyer_id: Uuid,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl From<&BuyInterest> for InterestResponse {
    fn from(interest: &BuyInterest) -> Self {
        Self {
            id: *interest.buy_interest_id.as_uuid(),
            product_id: *interest.product_id.as_uuid(),
            buyer_id: *interest.buyer_id.as_uuid(),
            payment_method: interest.payment_method,
            created_at: interest.created_at,
        }
    }
}

/// Buy interest on the seller's review screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestWithDetailsResponse {
    pub id: Uuid,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub product: ProductSummaryResponse,
    pub buyer: PartyResponse,
}

impl From<&InterestWithDetails> for InterestWithDetailsResponse {
    fn from(entry: &InterestWithDetails) -> Self {
        Self {
            id: *entry.interest.buy_interest_id.as_uuid(),
            payment_method: entry.interest.payment_method,
            created_at: entry.interest.created_at,
            product: ProductSummaryResponse::from(&entry.product),
            buyer: PartyResponse::from(&entry.buyer),
        }
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Create order request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: Uuid,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}

/// Newly created order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub buyer_id: Uuid,
    pub seller_id: Uuid,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub status: OrderStatus,
    pub buyer_contact: ContactResponse,
    pub order_date: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: *order.order_id.as_uuid(),
            product_id: *order.product_id.as_uuid(),
            buyer_id: *order.buyer_id.as_uuid(),
            seller_id: *order.seller_id.as_uuid(),
            payment_method: order.payment_method,
            transaction_id: order.transaction_id.clone(),
            status: order.status,
            buyer_contact: ContactResponse {
                name: order.buyer_contact.name.clone(),
                email: order.buyer_contact.email.clone(),
                phone: order.buyer_contact.phone.clone(),
            },
            order_date: order.order_date,
        }
    }
}

/// Order history entry (My Purchases / My Sales)
///
/// Purchases carry the seller as the counterpart; sales carry the buyer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryResponse {
    pub id: Uuid,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub order_date: DateTime<Utc>,
    pub product: ProductSummaryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<PartyResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<PartyResponse>,
    pub buyer_contact: ContactResponse,
}

impl OrderHistoryResponse {
    /// View for the buyer: counterpart is the seller
    pub fn purchase(entry: &OrderWithDetails) -> Self {
        let mut response = Self::base(entry);
        response.seller = Some(PartyResponse::from(&entry.counterpart));
        response
    }

    /// View for the seller: counterpart is the buyer
    pub fn sale(entry: &OrderWithDetails) -> Self {
        let mut response = Self::base(entry);
        response.buyer = Some(PartyResponse::from(&entry.counterpart));
        response
    }

    fn base(entry: &OrderWithDetails) -> Self {
        Self {
            id: *entry.order.order_id.as_uuid(),
            status: entry.order.status,
            payment_method: entry.order.payment_method,
            transaction_id: entry.order.transaction_id.clone(),
            order_date: entry.order.order_date,
            product: ProductSummaryResponse::from(&entry.product),
            seller: None,
            buyer: None,
            buyer_contact: ContactResponse {
                name: entry.order.buyer_contact.name.clone(),
                email: entry.order.buyer_contact.email.clone(),
                phone: entry.order.buyer_contact.phone.clone(),
            },
        }
    }
}

// ============================================================================
// Shared fragments
// ============================================================================

/// Product fields shown on interest and order views
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub price: i64,
    pub image_url: String,
}

impl From<&ProductSummary> for ProductSummaryResponse {
    fn from(product: &ProductSummary) -> Self {
        Self {
            id: *product.product_id.as_uuid(),
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

/// A party's public contact fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&PartyContact> for PartyResponse {
    fn from(party: &PartyContact) -> Self {
        Self {
            id: *party.user_id.as_uuid(),
            name: party.name.clone(),
            email: party.email.clone(),
            phone: party.phone.clone(),
        }
    }
}

/// Contact snapshot stored on the order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BuyerContact;
    use kernel::id::{ProductId, UserId};

    fn order_with_details() -> OrderWithDetails {
        let order = Order::new(
            ProductId::new(),
            UserId::new(),
            UserId::new(),
            PaymentMethod::Upi,
            Some("TXN42".to_string()),
            BuyerContact {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                phone: "9876543210".to_string(),
            },
        );

        OrderWithDetails {
            product: ProductSummary {
                product_id: order.product_id,
                title: "Wooden train set".to_string(),
                price: 500,
                image_url: "/api/products/image/abc.png".to_string(),
            },
            counterpart: PartyContact {
                user_id: order.seller_id,
                name: "Ravi".to_string(),
                email: "ravi@example.com".to_string(),
                phone: "9123456780".to_string(),
            },
            order,
        }
    }

    #[test]
    fn test_create_interest_request_parses_payment_strings() {
        let req: CreateInterestRequest = serde_json::from_str(&format!(
            r#"{{"productId":"{}","paymentMethod":"Cash on Delivery"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();
        assert_eq!(req.payment_method, PaymentMethod::CashOnDelivery);
    }

    #[test]
    fn test_purchase_view_carries_seller() {
        let entry = order_with_details();
        let json = serde_json::to_value(OrderHistoryResponse::purchase(&entry)).unwrap();

        assert_eq!(json["seller"]["name"], "Ravi");
        assert!(json.get("buyer").is_none());
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["paymentMethod"], "UPI");
        assert_eq!(json["buyerContact"]["name"], "Asha");
    }

    #[test]
    fn test_sale_view_carries_buyer() {
        let entry = order_with_details();
        let json = serde_json::to_value(OrderHistoryResponse::sale(&entry)).unwrap();

        assert_eq!(json["buyer"]["name"], "Ravi");
        assert!(json.get("seller").is_none());
    }

    #[test]
    fn test_order_response_snapshot_fields() {
        let entry = order_with_details();
        let json = serde_json::to_value(OrderResponse::from(&entry.order)).unwrap();

        assert_eq!(json["transactionId"], "TXN42");
        assert_eq!(json["buyerContact"]["email"], "asha@example.com");
    }
}
