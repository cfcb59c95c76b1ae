pub mod dataset;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use dataset::{MAX_DISCOUNT, MAX_MONEY, SalesData};
pub use enums::{BonusStrategyId, RevenueStrategyId};
pub use error::CoreError;
pub use structs::{LineItem, Product, PurchaseRecord, Seller, SellerView};
