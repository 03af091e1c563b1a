//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::id::{ProductId, UserId};
use std::sync::Arc;
use uuid::Uuid;

use auth::presentation::middleware::CurrentUser;

use crate::application::config::CatalogConfig;
use crate::application::{
    BrowseListingsUseCase, CreateListingInput, CreateListingUseCase, MarkSoldUseCase,
    StoreImageUseCase,
};
use crate::domain::repository::{ImageStore, ProductRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    CreateProductRequest, ListProductsQuery, MarkSoldRequest, MarkSoldResponse, ProductResponse,
    UploadResponse,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<P, I>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    pub products: Arc<P>,
    pub images: Arc<I>,
    pub config: Arc<CatalogConfig>,
}

// ============================================================================
// Browse
// ============================================================================

/// GET /api/products?category=<name>
pub async fn list_products<P, I>(
    State(state): State<CatalogAppState<P, I>>,
    Query(query): Query<ListProductsQuery>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = BrowseListingsUseCase::new(state.products.clone());

    let listings = use_case.list(query.category.as_deref()).await?;

    Ok(Json(listings.iter().map(ProductResponse::from).collect()))
}

/// GET /api/products/user/{user_id}
pub async fn list_by_owner<P, I>(
    State(state): State<CatalogAppState<P, I>>,
    Path(user_id): Path<Uuid>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = BrowseListingsUseCase::new(state.products.clone());

    let listings = use_case
        .list_by_owner(&UserId::from_uuid(user_id))
        .await?;

    Ok(Json(listings.iter().map(ProductResponse::from).collect()))
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/products
pub async fn create_product<P, I>(
    State(state): State<CatalogAppState<P, I>>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateProductRequest>,
) -> CatalogResult<impl IntoResponse>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = CreateListingUseCase::new(
        state.products.clone(),
        state.images.clone(),
        state.config.clone(),
    );

    let input = CreateListingInput {
        title: req.title,
        price: req.price,
        description: req.description,
        category: req.category,
        upi_id: req.upi_id,
        image_url: req.image_url,
    };

    let product = use_case.execute(user.user_id, input).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(&product))))
}

// ============================================================================
// Mark Sold
// ============================================================================

/// PUT /api/products/{id}/mark-sold
pub async fn mark_sold<P, I>(
    State(state): State<CatalogAppState<P, I>>,
    Extension(user): Extension<CurrentUser>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<MarkSoldRequest>,
) -> CatalogResult<Json<MarkSoldResponse>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = MarkSoldUseCase::new(state.products.clone());

    let product = use_case
        .execute(
            &ProductId::from_uuid(product_id),
            &user.user_id,
            &UserId::from_uuid(req.buyer_id),
        )
        .await?;

    Ok(Json(MarkSoldResponse {
        product: ProductResponse::from(&product),
    }))
}

// ============================================================================
// Images
// ============================================================================

/// POST /api/products/upload (multipart, field name `image`)
pub async fn upload_image<P, I>(
    State(state): State<CatalogAppState<P, I>>,
    Extension(user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> CatalogResult<Json<UploadResponse>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = StoreImageUseCase::new(state.images.clone(), state.config.clone());

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| CatalogError::InvalidImage(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field.content_type().map(str::to_owned);
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| CatalogError::InvalidImage(e.to_string()))?;

        let url = use_case
            .save(content_type.as_deref(), file_name.as_deref(), &bytes)
            .await?;

        tracing::info!(user_id = %user.user_id, url = %url, "Image uploaded");

        return Ok(Json(UploadResponse { url }));
    }

    Err(CatalogError::InvalidImage(
        "No image file provided".to_string(),
    ))
}

/// GET /api/products/image/{filename}
pub async fn serve_image<P, I>(
    State(state): State<CatalogAppState<P, I>>,
    Path(filename): Path<String>,
) -> CatalogResult<Response>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = StoreImageUseCase::new(state.images.clone(), state.config.clone());

    let (bytes, content_type) = use_case.fetch(&filename).await?;

    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

/// DELETE /api/products/image/{filename}
pub async fn delete_image<P, I>(
    State(state): State<CatalogAppState<P, I>>,
    Extension(user): Extension<CurrentUser>,
    Path(filename): Path<String>,
) -> CatalogResult<StatusCode>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    I: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = StoreImageUseCase::new(state.images.clone(), state.config.clone());

    use_case.delete(&filename).await?;

    tracing::info!(user_id = %user.user_id, filename = %filename, "Image removed by user");

    Ok(StatusCode::NO_CONTENT)
}
