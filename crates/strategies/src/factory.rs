use crate::error::StrategyError;
use crate::flat_rate_revenue::FlatRateRevenue;
use crate::profit_rank_bonus::ProfitRankBonus;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::Config;
use core_types::{BonusStrategyId, RevenueStrategyId};

/// Creates a revenue strategy from its configured name.
///
/// Returns `StrategyError::StrategyNotFound` if `name` does not identify a
/// built-in strategy.
pub fn create_revenue_strategy(
    name: &str,
    _config: &Config,
) -> Result<Box<dyn RevenueStrategy>, StrategyError> {
    let id: RevenueStrategyId = name.parse()?;

    // The compiler will error if a new RevenueStrategyId is added but not handled here.
    match id {
        RevenueStrategyId::Simple => Ok(Box::new(SimpleRevenue::new())),
        RevenueStrategyId::FlatRate => Ok(Box::new(FlatRateRevenue::new())),
    }
}

/// Creates a bonus strategy from its configured name, using the config's tier rates.
pub fn create_bonus_strategy(
    name: &str,
    config: &Config,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    let id: BonusStrategyId = name.parse()?;

    match id {
        BonusStrategyId::ProfitRank => {
            let tiers = config.bonus_tiers.clone();
            Ok(Box::new(ProfitRankBonus::new(tiers)?))
        }
    }
}
