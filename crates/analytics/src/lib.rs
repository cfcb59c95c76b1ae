//! # Sales Report Analytics Engine
//!
//! This crate turns purchase records, a product catalog and a seller roster into a
//! per-seller report: revenue, profit, sales count, top-10 products and a bonus
//! tiered on profit rank.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   databases or output formats. It depends on `core-types` for its inputs and on
//!   the `strategies` traits for the two pluggable calculations.
//! - **Stateless Calculation:** The `SalesAnalyzer` keeps no state between calls.
//!   Each call validates its input, aggregates per seller, ranks by profit and
//!   formats the result, in that order.
//! - **Fail Fast, Tolerate Gaps:** Missing collections or strategies are errors
//!   raised before any work is done. Records for unknown sellers and line items
//!   for unknown SKUs are skipped.
//!
//! ## Public API
//!
//! - `SalesAnalyzer`: The main struct that contains the calculation logic.
//! - `AnalysisOptions`: The revenue and bonus strategies handed to the analyzer.
//! - `RankedResult`: One seller's line in the finished report.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod options;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{SalesAnalyzer, TOP_PRODUCTS_LIMIT};
pub use error::AnalyticsError;
pub use options::{AnalysisOptions, StrategyBinding};
pub use report::{RankedResult, SellerStats, TopProduct, round_money};
