use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Identifies one of the built-in revenue strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevenueStrategyId {
    /// Receipt price times quantity, less the line item's percentage discount.
    Simple,
    /// Catalog sale price times quantity, ignoring discounts.
    FlatRate,
}

impl RevenueStrategyId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueStrategyId::Simple => "simple",
            RevenueStrategyId::FlatRate => "flat_rate",
        }
    }
}

impl FromStr for RevenueStrategyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "simple" => Ok(RevenueStrategyId::Simple),
            "flat_rate" => Ok(RevenueStrategyId::FlatRate),
            other => Err(CoreError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for RevenueStrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one of the built-in bonus strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusStrategyId {
    /// Tiered percentage of profit keyed on profit rank.
    ProfitRank,
}

impl BonusStrategyId {
    pub fn as_str(&self) -> &'static str {
        match self {
            BonusStrategyId::ProfitRank => "profit_rank",
        }
    }
}

impl FromStr for BonusStrategyId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "profit_rank" => Ok(BonusStrategyId::ProfitRank),
            other => Err(CoreError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for BonusStrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
