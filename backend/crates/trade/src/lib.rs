//! Trade (Buy Interests and Orders) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Model
//! - A buy interest is a buyer's non-binding intent to purchase a listing,
//!   at most one per (product, buyer) pair - the database index is the
//!   authority, not a read-then-write check
//! - An order denormalizes the seller and snapshots the buyer's contact
//!   details at creation time; later profile edits never rewrite history
//! - A buyer can never express interest in, or order, their own listing

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TradeError, TradeResult};
pub use infra::postgres::PgTradeRepository;
pub use presentation::router::{buy_interests_router, orders_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgTradeRepository as TradeStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
