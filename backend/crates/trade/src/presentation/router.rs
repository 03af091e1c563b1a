//! Trade Routers
//!
//! Every trade route requires authentication.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::infra::postgres::PgAuthRepository;
use auth::presentation::middleware::{AuthGateState, require_bearer_auth};
use catalog::infra::postgres::PgCatalogRepository;

use crate::infra::postgres::PgTradeRepository;
use crate::presentation::handlers::{self, TradeAppState};

type P = PgCatalogRepository;
type U = PgAuthRepository;
type R = PgTradeRepository;

/// Create the buy-interests router with PostgreSQL repositories
pub fn buy_interests_router(
    products: PgCatalogRepository,
    users: PgAuthRepository,
    repo: PgTradeRepository,
    auth_gate: AuthGateState<PgAuthRepository>,
) -> Router {
    let state = TradeAppState {
        products: Arc::new(products),
        users: Arc::new(users),
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", post(handlers::express_interest::<P, U, R>))
        .route(
            "/seller-products",
            get(handlers::seller_interests::<P, U, R>),
        )
        .layer(middleware::from_fn_with_state(
            auth_gate,
            require_bearer_auth::<PgAuthRepository>,
        ))
        .with_state(state)
}

/// Create the orders router with PostgreSQL repositories
pub fn orders_router(
    products: PgCatalogRepository,
    users: PgAuthRepository,
    repo: PgTradeRepository,
    auth_gate: AuthGateState<PgAuthRepository>,
) -> Router {
    let state = TradeAppState {
        products: Arc::new(products),
        users: Arc::new(users),
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", post(handlers::create_order::<P, U, R>))
        .route("/my-purchases", get(handlers::my_purchases::<P, U, R>))
        .route("/my-sales", get(handlers::my_sales::<P, U, R>))
        .layer(middleware::from_fn_with_state(
            auth_gate,
            require_bearer_auth::<PgAuthRepository>,
        ))
        .with_state(state)
}
