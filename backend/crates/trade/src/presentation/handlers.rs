//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::ProductId;
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::CurrentUser;
use catalog::domain::repository::ProductRepository;

use crate::application::{
    ExpressInterestUseCase, OrderHistoryUseCase, PlaceOrderInput, PlaceOrderUseCase,
    SellerInterestsUseCase,
};
use crate::domain::repository::{BuyInterestRepository, OrderRepository};
use crate::error::TradeResult;
use crate::presentation::dto::{
    CreateInterestRequest, CreateOrderRequest, InterestResponse, InterestWithDetailsResponse,
    OrderHistoryResponse, OrderResponse,
};

/// Shared state for trade handlers
#[derive(Clone)]
pub struct TradeAppState<P, U, R>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: BuyInterestRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    pub products: Arc<P>,
    pub users: Arc<U>,
    pub repo: Arc<R>,
}

// ============================================================================
// Buy Interests
// ============================================================================

/// POST /api/buy-interests
pub async fn express_interest<P, U, R>(
    State(state): State<TradeAppState<P, U, R>>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateInterestRequest>,
) -> TradeResult<impl IntoResponse>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: BuyInterestRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = ExpressInterestUseCase::new(state.products.clone(), state.repo.clone());

    let interest = use_case
        .execute(
            user.user_id,
            ProductId::from_uuid(req.product_id),
            req.payment_method,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InterestResponse::from(&interest)),
    ))
}

/// GET /api/buy-interests/seller-products
pub async fn seller_interests<P, U, R>(
    State(state): State<TradeAppState<P, U, R>>,
    Extension(user): Extension<CurrentUser>,
) -> TradeResult<Json<Vec<InterestWithDetailsResponse>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: BuyInterestRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = SellerInterestsUseCase::new(state.repo.clone());

    let interests = use_case.execute(&user.user_id).await?;

    Ok(Json(
        interests
            .iter()
            .map(InterestWithDetailsResponse::from)
            .collect(),
    ))
}

// ============================================================================
// Orders
// ============================================================================

/// POST /api/orders
pub async fn create_order<P, U, R>(
    State(state): State<TradeAppState<P, U, R>>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreateOrderRequest>,
) -> TradeResult<impl IntoResponse>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: BuyInterestRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = PlaceOrderUseCase::new(
        state.products.clone(),
        state.users.clone(),
        state.repo.clone(),
    );

    let input = PlaceOrderInput {
        product_id: ProductId::from_uuid(req.product_id),
        payment_method: req.payment_method,
        transaction_id: req.transaction_id,
    };

    let order = use_case.execute(user.user_id, input).await?;

    Ok((StatusCode::CREATED, Json(OrderResponse::from(&order))))
}

/// GET /api/orders/my-purchases
pub async fn my_purchases<P, U, R>(
    State(state): State<TradeAppState<P, U, R>>,
    Extension(user): Extension<CurrentUser>,
) -> TradeResult<Json<Vec<OrderHistoryResponse>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: BuyInterestRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = OrderHistoryUseCase::new(state.repo.clone());

    let orders = use_case.purchases(&user.user_id).await?;

    Ok(Json(
        orders.iter().map(OrderHistoryResponse::purchase).collect(),
    ))
}

/// GET /api/orders/my-sales
pub async fn my_sales<P, U, R>(
    State(state): State<TradeAppState<P, U, R>>,
    Extension(user): Extension<CurrentUser>,
) -> TradeResult<Json<Vec<OrderHistoryResponse>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    R: BuyInterestRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let use_case = OrderHistoryUseCase::new(state.repo.clone());

    let orders = use_case.sales(&user.user_id).await?;

    Ok(Json(
        orders.iter().map(OrderHistoryResponse::sale).collect(),
    ))
}
