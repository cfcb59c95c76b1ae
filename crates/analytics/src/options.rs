use configuration::{Config, StrategySettings};
use std::fmt;
use std::sync::Arc;
use strategies::{
    BonusStrategy, ProfitRankBonus, RevenueStrategy, SimpleRevenue, create_bonus_strategy,
    create_revenue_strategy,
};

/// Name of the revenue slot, as it appears in configuration and errors.
pub const REVENUE_STRATEGY_KEY: &str = "calculate_revenue";
/// Name of the bonus slot, as it appears in configuration and errors.
pub const BONUS_STRATEGY_KEY: &str = "calculate_bonus";

/// A strategy slot that has been filled in.
pub enum StrategyBinding<S: ?Sized> {
    /// A strategy that can be invoked.
    Callable(Arc<S>),
    /// A configured name that did not resolve to any implementation.
    Unresolved(String),
}

impl<S: ?Sized> StrategyBinding<S> {
    /// Returns the strategy if this binding can be invoked.
    pub fn as_callable(&self) -> Option<&S> {
        match self {
            StrategyBinding::Callable(strategy) => Some(strategy.as_ref()),
            StrategyBinding::Unresolved(_) => None,
        }
    }
}

impl<S: ?Sized> Clone for StrategyBinding<S> {
    fn clone(&self) -> Self {
        match self {
            StrategyBinding::Callable(strategy) => StrategyBinding::Callable(Arc::clone(strategy)),
            StrategyBinding::Unresolved(name) => StrategyBinding::Unresolved(name.clone()),
        }
    }
}

impl<S: ?Sized> fmt::Debug for StrategyBinding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyBinding::Callable(_) => f.write_str("Callable(..)"),
            StrategyBinding::Unresolved(name) => f.debug_tuple("Unresolved").field(name).finish(),
        }
    }
}

/// The two pluggable calculation steps handed to the analyzer.
///
/// Either slot may be empty or hold an unresolved name; the analyzer reports
/// those cases as errors before doing any work.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<StrategyBinding<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<StrategyBinding<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Creates an empty bundle with neither strategy set.
    pub fn new() -> Self {
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
        }
    }

    /// The reference strategies: receipt-price revenue and default profit-rank tiers.
    pub fn reference() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue::new())
            .with_bonus(ProfitRankBonus::default())
    }

    pub fn with_revenue<S: RevenueStrategy + 'static>(mut self, strategy: S) -> Self {
        let strategy: Arc<dyn RevenueStrategy> = Arc::new(strategy);
        self.calculate_revenue = Some(StrategyBinding::Callable(strategy));
        self
    }

    pub fn with_bonus<S: BonusStrategy + 'static>(mut self, strategy: S) -> Self {
        let strategy: Arc<dyn BonusStrategy> = Arc::new(strategy);
        self.calculate_bonus = Some(StrategyBinding::Callable(strategy));
        self
    }

    /// Builds the bundle from the `[strategies]` table of a loaded config.
    ///
    /// Returns `None` when the table is absent. Names that the factory does not
    /// recognise are kept as `Unresolved` so that validation can report them.
    pub fn from_config(config: &Config) -> Option<Self> {
        let settings: &StrategySettings = config.strategies.as_ref()?;

        let calculate_revenue = configured_name(settings.calculate_revenue.as_deref()).map(|name| {
            match create_revenue_strategy(name, config) {
                Ok(strategy) => StrategyBinding::Callable(Arc::<dyn RevenueStrategy>::from(strategy)),
                Err(e) => {
                    tracing::warn!("Revenue strategy '{}' could not be created: {}", name, e);
                    StrategyBinding::Unresolved(name.to_string())
                }
            }
        });

        let calculate_bonus = configured_name(settings.calculate_bonus.as_deref()).map(|name| {
            match create_bonus_strategy(name, config) {
                Ok(strategy) => StrategyBinding::Callable(Arc::<dyn BonusStrategy>::from(strategy)),
                Err(e) => {
                    tracing::warn!("Bonus strategy '{}' could not be created: {}", name, e);
                    StrategyBinding::Unresolved(name.to_string())
                }
            }
        });

        Some(Self {
            calculate_revenue,
            calculate_bonus,
        })
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A blank name counts as not configured.
fn configured_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|name| !name.is_empty())
}
