//! Catalog Router
//!
//! Browse and image-serving routes are public; listing mutation and
//! uploads sit behind the auth gate.

use axum::extract::DefaultBodyLimit;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use auth::infra::postgres::PgAuthRepository;
use auth::presentation::middleware::{AuthGateState, require_bearer_auth};

use crate::application::config::CatalogConfig;
use crate::infra::fs_images::FsImageStore;
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Multipart framing overhead allowed on top of the image size cap
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the Catalog router with PostgreSQL repository and disk images
pub fn catalog_router(
    repo: PgCatalogRepository,
    images: FsImageStore,
    config: CatalogConfig,
    auth_gate: AuthGateState<PgAuthRepository>,
) -> Router {
    let max_body = config.max_image_bytes + UPLOAD_OVERHEAD_BYTES;

    let state = CatalogAppState {
        products: Arc::new(repo),
        images: Arc::new(images),
        config: Arc::new(config),
    };

    type P = PgCatalogRepository;
    type I = FsImageStore;

    let public = Router::new()
        .route("/", get(handlers::list_products::<P, I>))
        .route("/user/{user_id}", get(handlers::list_by_owner::<P, I>))
        .route("/image/{filename}", get(handlers::serve_image::<P, I>));

    let protected = Router::new()
        .route("/", post(handlers::create_product::<P, I>))
        .route("/{id}/mark-sold", put(handlers::mark_sold::<P, I>))
        .route("/upload", post(handlers::upload_image::<P, I>))
        .route("/image/{filename}", delete(handlers::delete_image::<P, I>))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(middleware::from_fn_with_state(
            auth_gate,
            require_bearer_auth::<PgAuthRepository>,
        ));

    public.merge(protected).with_state(state)
}
