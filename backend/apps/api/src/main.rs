//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, AuthGateState, PgAuthRepository, auth_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use catalog::{CatalogConfig, FsImageStore, PgCatalogRepository, catalog_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trade::{PgTradeRepository, buy_interests_router, orders_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,catalog=info,trade=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token signing secret. There is no fixed fallback key: release builds
    // refuse to start without one, debug builds fall back to a random
    // per-process secret (tokens don't survive a restart).
    let mut auth_config = match env::var("AUTH_TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
            if secret_bytes.len() != 32 {
                anyhow::bail!("AUTH_TOKEN_SECRET must decode to exactly 32 bytes");
            }
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&secret_bytes);
            AuthConfig::new(secret)
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("AUTH_TOKEN_SECRET not set; using a random per-process secret");
            AuthConfig::with_random_secret()
        }
        Err(_) => {
            anyhow::bail!("AUTH_TOKEN_SECRET must be set in production");
        }
    };

    if let Ok(pepper_b64) = env::var("AUTH_PASSWORD_PEPPER") {
        auth_config.password_pepper =
            Some(Engine::decode(&general_purpose::STANDARD, &pepper_b64)?);
    }

    // Image uploads directory
    let mut catalog_config = CatalogConfig::default();
    if let Ok(dir) = env::var("UPLOADS_DIR") {
        catalog_config.uploads_dir = dir.into();
    }
    tokio::fs::create_dir_all(&catalog_config.uploads_dir).await?;

    tracing::info!(uploads_dir = %catalog_config.uploads_dir.display(), "Uploads directory ready");

    // Stores
    let auth_repo = PgAuthRepository::new(pool.clone());
    let catalog_repo = PgCatalogRepository::new(pool.clone());
    let trade_repo = PgTradeRepository::new(pool.clone());
    let images = FsImageStore::new(catalog_config.uploads_dir.clone());

    // Auth gate shared by every protected router
    let auth_gate = AuthGateState {
        repo: Arc::new(auth_repo.clone()),
        config: Arc::new(auth_config.clone()),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:19006,http://127.0.0.1:19006".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/api/health", get(health))
        .nest("/api/auth", auth_router(auth_repo.clone(), auth_config))
        .nest(
            "/api/products",
            catalog_router(
                catalog_repo.clone(),
                images,
                catalog_config,
                auth_gate.clone(),
            ),
        )
        .nest(
            "/api/buy-interests",
            buy_interests_router(
                catalog_repo.clone(),
                auth_repo.clone(),
                trade_repo.clone(),
                auth_gate.clone(),
            ),
        )
        .nest(
            "/api/orders",
            orders_router(catalog_repo, auth_repo, trade_repo, auth_gate),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Server is working!" }))
}
