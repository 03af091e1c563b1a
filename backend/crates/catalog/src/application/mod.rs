//! Application Layer
//!
//! Use cases and application services.

pub mod browse_listings;
pub mod config;
pub mod create_listing;
pub mod mark_sold;
pub mod store_image;

// Re-exports
pub use browse_listings::BrowseListingsUseCase;
pub use create_listing::{CreateListingInput, CreateListingUseCase};
pub use mark_sold::MarkSoldUseCase;
pub use store_image::StoreImageUseCase;
