//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{BuyInterestId, OrderId, ProductId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{
    BuyInterest, BuyerContact, InterestWithDetails, Order, OrderWithDetails, PartyContact,
    ProductSummary,
};
use crate::domain::repository::{BuyInterestRepository, OrderRepository};
use crate::domain::value_objects::{OrderStatus, PaymentMethod};
use crate::error::{TradeError, TradeResult};

/// PostgreSQL-backed trade repository
#[derive(Clone)]
pub struct PgTradeRepository {
    pool: PgPool,
}

impl PgTradeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation to a domain conflict error
fn map_unique_violation(err: sqlx::Error, conflict: TradeError) -> TradeError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return conflict;
        }
    }
    TradeError::Database(err)
}

// ============================================================================
// Buy Interest Repository Implementation
// ============================================================================

impl BuyInterestRepository for PgTradeRepository {
    async fn create(&self, interest: &BuyInterest) -> TradeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO buy_interests (
                buy_interest_id,
                product_id,
                buyer_id,
                payment_method,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(interest.buy_interest_id.as_uuid())
        .bind(interest.product_id.as_uuid())
        .bind(interest.buyer_id.as_uuid())
        .bind(interest.payment_method.as_str())
        .bind(interest.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, TradeError::DuplicateInterest))?;

        Ok(())
    }

    async fn list_for_seller(&self, seller_id: &UserId) -> TradeResult<Vec<InterestWithDetails>> {
        let rows = sqlx::query_as::<_, InterestWithDetailsRow>(
            r#"
            SELECT
                bi.buy_interest_id,
                bi.product_id,
                bi.buyer_id,
                bi.payment_method,
                bi.created_at,
                p.title AS product_title,
                p.price AS product_price,
                p.image_url AS product_image_url,
                u.name AS buyer_name,
                u.email AS buyer_email,
                u.phone AS buyer_phone
            FROM buy_interests bi
            JOIN products p ON p.product_id = bi.product_id
            JOIN users u ON u.user_id = bi.buyer_id
            WHERE p.owner_id = $1
            ORDER BY bi.created_at DESC
            "#,
        )
        .bind(seller_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_details()).collect()
    }
}

// ============================================================================
// Order Repository Implementation
// ============================================================================

impl OrderRepository for PgTradeRepository {
    async fn create(&self, order: &Order) -> TradeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id,
                product_id,
                buyer_id,
                seller_id,
                payment_method,
                transaction_id,
                status,
                buyer_name,
                buyer_email,
                buyer_phone,
                order_date,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(order.order_id.as_uuid())
        .bind(order.product_id.as_uuid())
        .bind(order.buyer_id.as_uuid())
        .bind(order.seller_id.as_uuid())
        .bind(order.payment_method.as_str())
        .bind(order.transaction_id.as_deref())
        .bind(order.status.as_str())
        .bind(&order.buyer_contact.name)
        .bind(&order.buyer_contact.email)
        .bind(&order.buyer_contact.phone)
        .bind(order.order_date)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_buyer(&self, buyer_id: &UserId) -> TradeResult<Vec<OrderWithDetails>> {
        let rows = sqlx::query_as::<_, OrderWithDetailsRow>(
            r#"
            SELECT
                o.order_id,
                o.product_id,
                o.buyer_id,
                o.seller_id,
                o.payment_method,
                o.transaction_id,
                o.status,
                o.buyer_name,
                o.buyer_email,
                o.buyer_phone,
                o.order_date,
                o.created_at,
                o.updated_at,
                p.title AS product_title,
                p.price AS product_price,
                p.image_url AS product_image_url,
                u.user_id AS party_id,
                u.name AS party_name,
                u.email AS party_email,
                u.phone AS party_phone
            FROM orders o
            JOIN products p ON p.product_id = o.product_id
            JOIN users u ON u.user_id = o.seller_id
            WHERE o.buyer_id = $1
            ORDER BY o.order_date DESC
            "#,
        )
        .bind(buyer_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_details()).collect()
    }

    async fn list_by_seller(&self, seller_id: &UserId) -> TradeResult<Vec<OrderWithDetails>> {
        let rows = sqlx::query_as::<_, OrderWithDetailsRow>(
            r#"
            SELECT
                o.order_id,
                o.product_id,
                o.buyer_id,
                o.seller_id,
                o.payment_method,
                o.transaction_id,
                o.status,
                o.buyer_name,
                o.buyer_email,
                o.buyer_phone,
                o.order_date,
                o.created_at,
                o.updated_at,
                p.title AS product_title,
                p.price AS product_price,
                p.image_url AS product_image_url,
                u.user_id AS party_id,
                u.name AS party_name,
                u.email AS party_email,
                u.phone AS party_phone
            FROM orders o
            JOIN products p ON p.product_id = o.product_id
            JOIN users u ON u.user_id = o.buyer_id
            WHERE o.seller_id = $1
            ORDER BY o.order_date DESC
            "#,
        )
        .bind(seller_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_details()).collect()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct InterestWithDetailsRow {
    buy_interest_id: Uuid,
    product_id: Uuid,
    buyer_id: Uuid,
    payment_method: String,
    created_at: DateTime<Utc>,
    product_title: String,
    product_price: i64,
    product_image_url: String,
    buyer_name: String,
    buyer_email: String,
    buyer_phone: String,
}

impl InterestWithDetailsRow {
    fn into_details(self) -> TradeResult<InterestWithDetails> {
        let payment_method = PaymentMethod::from_db(&self.payment_method)
            .map_err(|e| TradeError::Internal(e.to_string()))?;

        Ok(InterestWithDetails {
            interest: BuyInterest {
                buy_interest_id: BuyInterestId::from_uuid(self.buy_interest_id),
                product_id: ProductId::from_uuid(self.product_id),
                buyer_id: UserId::from_uuid(self.buyer_id),
                payment_method,
                created_at: self.created_at,
            },
            product: ProductSummary {
                product_id: ProductId::from_uuid(self.product_id),
                title: self.product_title,
                price: self.product_price,
                image_url: self.product_image_url,
            },
            buyer: PartyContact {
                user_id: UserId::from_uuid(self.buyer_id),
                name: self.buyer_name,
                email: self.buyer_email,
                phone: self.buyer_phone,
            },
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderWithDetailsRow {
    order_id: Uuid,
    product_id: Uuid,
    buyer_id: Uuid,
    seller_id: Uuid,
    payment_method: String,
    transaction_id: Option<String>,
    status: String,
    buyer_name: String,
    buyer_email: String,
    buyer_phone: String,
    order_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    product_title: String,
    product_price: i64,
    product_image_url: String,
    party_id: Uuid,
    party_name: String,
    party_email: String,
    party_phone: String,
}

impl OrderWithDetailsRow {
    fn into_details(self) -> TradeResult<OrderWithDetails> {
        let payment_method = PaymentMethod::from_db(&self.payment_method)
            .map_err(|e| TradeError::Internal(e.to_string()))?;
        let status = OrderStatus::from_db(&self.status)
            .map_err(|e| TradeError::Internal(e.to_string()))?;

        Ok(OrderWithDetails {
            order: Order {
                order_id: OrderId::from_uuid(self.order_id),
                product_id: ProductId::from_uuid(self.product_id),
                buyer_id: UserId::from_uuid(self.buyer_id),
                seller_id: UserId::from_uuid(self.seller_id),
                payment_method,
                transaction_id: self.transaction_id,
                status,
                buyer_contact: BuyerContact {
                    name: self.buyer_name,
                    email: self.buyer_email,
                    phone: self.buyer_phone,
                },
                order_date: self.order_date,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            product: ProductSummary {
                product_id: ProductId::from_uuid(self.product_id),
                title: self.product_title,
                price: self.product_price,
                image_url: self.product_image_url,
            },
            counterpart: PartyContact {
                user_id: UserId::from_uuid(self.party_id),
                name: self.party_name,
                email: self.party_email,
                phone: self.party_phone,
            },
        })
    }
}
