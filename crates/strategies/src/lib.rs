//! # Sales Report Strategy Library
//!
//! This crate contains the pluggable calculation steps of the sales report. It
//! defines the `RevenueStrategy` and `BonusStrategy` traits and provides the
//! reference implementations.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on `core-types`
//!   and `configuration`.
//! - **Strategy Agnostic Analyzer:** The `analytics` crate only sees the traits, so
//!   callers can swap in any implementation, including a plain closure.
//! - **Extensibility:** Adding a new strategy involves creating a new module,
//!   implementing one of the traits, and adding it to the id enums and `factory`.
//!
//! ## Public API
//!
//! - `RevenueStrategy` / `BonusStrategy`: The traits all strategies implement.
//! - `create_revenue_strategy` / `create_bonus_strategy`: Name-based factories.
//! - The concrete strategy structs themselves (e.g., `SimpleRevenue`).

// Declare all the modules that constitute this crate.
pub mod error;
pub mod factory;
pub mod flat_rate_revenue;
pub mod profit_rank_bonus;
pub mod simple_revenue;

// Re-export the key components to create a clean, public-facing API.
pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use flat_rate_revenue::FlatRateRevenue;
pub use profit_rank_bonus::ProfitRankBonus;
pub use simple_revenue::SimpleRevenue;

// Re-export the strategy ids from core_types
pub use core_types::{BonusStrategyId, RevenueStrategyId};

use core_types::{LineItem, Product, SellerView};
use rust_decimal::Decimal;

/// Computes the revenue earned by one line item of a receipt.
///
/// The `Send + Sync` bounds let a configured strategy be shared freely, e.g.
/// behind an `Arc` in the analyzer's options.
pub trait RevenueStrategy: Send + Sync {
    /// Returns the revenue, in currency units, for `item` sold as `product`.
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Decimal;
}

/// Computes the bonus rate for a seller from their position in the profit ranking.
pub trait BonusStrategy: Send + Sync {
    /// Returns the bonus as a fraction of profit, normally within `[0, 1]`.
    ///
    /// # Arguments
    ///
    /// * `index` - The seller's zero-based rank, most profitable first.
    /// * `total` - The number of ranked sellers.
    /// * `seller` - The roster entry together with the seller's profit.
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerView) -> Decimal;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Decimal + Send + Sync,
{
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Decimal {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerView) -> Decimal + Send + Sync,
{
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerView) -> Decimal {
        self(index, total, seller)
    }
}
