//! Catalog (Product Listings) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database and filesystem implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - A product is listed by its owner and stays `Active` until the owner
//!   marks it `Sold` - a one-way transition recording the chosen buyer
//! - The sold transition is a single conditional UPDATE, so it can happen
//!   at most once per product even under concurrent requests
//! - Listing images live on disk under server-generated UUID filenames

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::fs_images::FsImageStore;
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::catalog_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::fs_images::FsImageStore;
    pub use crate::infra::postgres::PgCatalogRepository as ProductStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
