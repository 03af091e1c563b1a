//! Application Layer
//!
//! Use cases and application services.

pub mod express_interest;
pub mod order_history;
pub mod place_order;
pub mod seller_interests;

// Re-exports
pub use express_interest::ExpressInterestUseCase;
pub use order_history::OrderHistoryUseCase;
pub use place_order::{PlaceOrderInput, PlaceOrderUseCase};
pub use seller_interests::SellerInterestsUseCase;
