use crate::error::StrategyError;
use crate::BonusStrategy;
use configuration::BonusTiers;
use core_types::SellerView;
use rust_decimal::Decimal;

/// Tiered bonus keyed on a seller's profit rank.
///
/// Rules are checked in order and the first match wins:
/// 1. rank 0 earns the `first` rate;
/// 2. ranks 1 and 2 earn the `runner_up` rate;
/// 3. the last rank earns the `last` rate;
/// 4. everyone else earns the `default` rate.
///
/// With three or fewer sellers the last seller is also a top-three seller and
/// gets the higher rate.
#[derive(Debug, Clone, Default)]
pub struct ProfitRankBonus {
    tiers: BonusTiers,
}

impl ProfitRankBonus {
    /// Creates a new `ProfitRankBonus` with the given tier rates.
    pub fn new(tiers: BonusTiers) -> Result<Self, StrategyError> {
        tiers
            .validate()
            .map_err(|e| StrategyError::InvalidParameters(e.to_string()))?;
        Ok(Self { tiers })
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerView) -> Decimal {
        let rate = if index == 0 {
            self.tiers.first
        } else if index == 1 || index == 2 {
            self.tiers.runner_up
        } else if index + 1 == total {
            self.tiers.last
        } else {
            self.tiers.default
        };

        tracing::trace!(
            "ProfitRankBonus: seller {} at rank {}/{} gets rate {}",
            seller.seller.id,
            index,
            total,
            rate
        );
        rate
    }
}
