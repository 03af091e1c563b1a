//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ProductId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{OwnerSummary, Product, ProductWithOwner};
use crate::domain::repository::{MarkSoldOutcome, ProductRepository};
use crate::domain::value_objects::{Price, UpiId};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = r#"
    product_id,
    owner_id,
    title,
    price,
    description,
    category,
    image_url,
    upi_id,
    is_sold,
    sold_to,
    created_at,
    updated_at
"#;

impl ProductRepository for PgCatalogRepository {
    async fn create(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                owner_id,
                title,
                price,
                description,
                category,
                image_url,
                upi_id,
                is_sold,
                sold_to,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(product.owner_id.as_uuid())
        .bind(&product.title)
        .bind(product.price.amount())
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.image_url)
        .bind(product.upi_id.as_str())
        .bind(product.is_sold)
        .bind(product.sold_to.as_ref().map(|id| *id.as_uuid()))
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_product()))
    }

    async fn list(&self, category: Option<&str>) -> CatalogResult<Vec<ProductWithOwner>> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, ProductWithOwnerRow>(
                    r#"
                    SELECT
                        p.product_id,
                        p.owner_id,
                        p.title,
                        p.price,
                        p.description,
                        p.category,
                        p.image_url,
                        p.upi_id,
                        p.is_sold,
                        p.sold_to,
                        p.created_at,
                        p.updated_at,
                        u.name AS owner_name,
                        u.email AS owner_email
                    FROM products p
                    JOIN users u ON u.user_id = p.owner_id
                    WHERE p.category = $1
                    ORDER BY p.created_at DESC
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProductWithOwnerRow>(
                    r#"
                    SELECT
                        p.product_id,
                        p.owner_id,
                        p.title,
                        p.price,
                        p.description,
                        p.category,
                        p.image_url,
                        p.upi_id,
                        p.is_sold,
                        p.sold_to,
                        p.created_at,
                        p.updated_at,
                        u.name AS owner_name,
                        u.email AS owner_email
                    FROM products p
                    JOIN users u ON u.user_id = p.owner_id
                    ORDER BY p.created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(|r| r.into_product_with_owner()).collect())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> CatalogResult<Vec<ProductWithOwner>> {
        let rows = sqlx::query_as::<_, ProductWithOwnerRow>(
            r#"
            SELECT
                p.product_id,
                p.owner_id,
                p.title,
                p.price,
                p.description,
                p.category,
                p.image_url,
                p.upi_id,
                p.is_sold,
                p.sold_to,
                p.created_at,
                p.updated_at,
                u.name AS owner_name,
                u.email AS owner_email
            FROM products p
            JOIN users u ON u.user_id = p.owner_id
            WHERE p.owner_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_product_with_owner()).collect())
    }

    async fn mark_sold(
        &self,
        product_id: &ProductId,
        requester_id: &UserId,
        buyer_id: &UserId,
    ) -> CatalogResult<MarkSoldOutcome> {
        // The only writer of is_sold/sold_to. Conditional on is_sold = FALSE
        // so the transition happens at most once even under concurrency.
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products SET
                is_sold = TRUE,
                sold_to = $3,
                updated_at = $4
            WHERE product_id = $1 AND owner_id = $2 AND is_sold = FALSE
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product_id.as_uuid())
        .bind(requester_id.as_uuid())
        .bind(buyer_id.as_uuid())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, "Buyer does not exist"))?;

        if let Some(r) = row {
            return Ok(MarkSoldOutcome::Sold(r.into_product()));
        }

        // No row updated - read back only to classify the failure
        let current = sqlx::query_as::<_, (Uuid, bool)>(
            "SELECT owner_id, is_sold FROM products WHERE product_id = $1",
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match current {
            None => Ok(MarkSoldOutcome::NotFound),
            Some((owner_id, _)) if owner_id != *requester_id.as_uuid() => {
                Ok(MarkSoldOutcome::NotOwner)
            }
            Some((_, true)) => Ok(MarkSoldOutcome::AlreadySold),
            Some(_) => Err(CatalogError::Internal(
                "Sold transition failed unexpectedly".to_string(),
            )),
        }
    }
}

/// Map a foreign-key violation to a validation error
fn map_fk_violation(err: sqlx::Error, message: &str) -> CatalogError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23503") {
            return CatalogError::Validation(message.to_string());
        }
    }
    CatalogError::Database(err)
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    owner_id: Uuid,
    title: String,
    price: i64,
    description: String,
    category: String,
    image_url: String,
    upi_id: String,
    is_sold: bool,
    sold_to: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            owner_id: UserId::from_uuid(self.owner_id),
            title: self.title,
            price: Price::from_db(self.price),
            description: self.description,
            category: self.category,
            image_url: self.image_url,
            upi_id: UpiId::from_db(self.upi_id),
            is_sold: self.is_sold,
            sold_to: self.sold_to.map(UserId::from_uuid),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductWithOwnerRow {
    product_id: Uuid,
    owner_id: Uuid,
    title: String,
    price: i64,
    description: String,
    category: String,
    image_url: String,
    upi_id: String,
    is_sold: bool,
    sold_to: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
    owner_email: String,
}

impl ProductWithOwnerRow {
    fn into_product_with_owner(self) -> ProductWithOwner {
        let owner = OwnerSummary {
            user_id: UserId::from_uuid(self.owner_id),
            name: self.owner_name,
            email: self.owner_email,
        };

        let product = Product {
            product_id: ProductId::from_uuid(self.product_id),
            owner_id: UserId::from_uuid(self.owner_id),
            title: self.title,
            price: Price::from_db(self.price),
            description: self.description,
            category: self.category,
            image_url: self.image_url,
            upi_id: UpiId::from_db(self.upi_id),
            is_sold: self.is_sold,
            sold_to: self.sold_to.map(UserId::from_uuid),
            created_at: self.created_at,
            updated_at: self.updated_at,
        };

        ProductWithOwner { product, owner }
    }
}
