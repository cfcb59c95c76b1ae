use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportSettings,
    /// The named strategies to inject into the analyzer. `None` when the
    /// `[strategies]` table is missing altogether.
    #[serde(default)]
    pub strategies: Option<StrategySettings>,
    #[serde(default)]
    pub bonus_tiers: BonusTiers,
}

impl Config {
    /// Checks that every configured value is within its legal range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bonus_tiers.validate()
    }
}

/// Controls how the finished report is presented.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array of seller results.
    Json,
    /// A human-readable table.
    #[default]
    Table,
}

/// Names of the strategies used for the two pluggable calculation steps.
///
/// Names are kept as plain strings here; resolving them to implementations is
/// the job of the `strategies` factory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StrategySettings {
    pub calculate_revenue: Option<String>,
    pub calculate_bonus: Option<String>,
}

/// Bonus rates, as fractions of profit, for the profit-rank bonus strategy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BonusTiers {
    /// Rate for the most profitable seller.
    pub first: Decimal,
    /// Rate for the second and third most profitable sellers.
    pub runner_up: Decimal,
    /// Rate for the least profitable seller.
    pub last: Decimal,
    /// Rate for everyone else.
    pub default: Decimal,
}

impl Default for BonusTiers {
    fn default() -> Self {
        Self {
            first: dec!(0.15),
            runner_up: dec!(0.10),
            last: dec!(0),
            default: dec!(0.05),
        }
    }
}

impl BonusTiers {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiers = [
            ("first", self.first),
            ("runner_up", self.runner_up),
            ("last", self.last),
            ("default", self.default),
        ];

        for (name, rate) in tiers {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ConfigError::ValidationError(format!(
                    "bonus_tiers.{name} must be between 0 and 1, got {rate}"
                )));
            }
        }
        Ok(())
    }
}
