use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{BonusTiers, Config, OutputFormat, ReportSettings, StrategySettings};

/// Prefix for environment variables overriding file values,
/// e.g. `SALES_REPORT__STRATEGIES__CALCULATE_REVENUE=flat_rate`.
pub const ENV_PREFIX: &str = "SALES_REPORT";

/// Loads the application configuration from a TOML file.
///
/// The file is optional: when it does not exist, every section falls back to
/// its defaults (except `[strategies]`, which stays unset). Environment
/// variables prefixed with [`ENV_PREFIX`] are layered on top.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!("Loaded configuration from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_file() {
        let file = write_toml(
            r#"
            [report]
            format = "json"

            [strategies]
            calculate_revenue = "flat_rate"
            calculate_bonus = "profit_rank"

            [bonus_tiers]
            first = 0.2
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.report.format, OutputFormat::Json);

        let strategies = config.strategies.unwrap();
        assert_eq!(strategies.calculate_revenue.as_deref(), Some("flat_rate"));
        assert_eq!(strategies.calculate_bonus.as_deref(), Some("profit_rank"));

        assert_eq!(config.bonus_tiers.first, dec!(0.2));
        assert_eq!(config.bonus_tiers.runner_up, dec!(0.10));
    }

    #[test]
    fn missing_strategies_table_stays_unset() {
        let file = write_toml("[report]\nformat = \"table\"\n");
        let config = load_config(file.path()).unwrap();
        assert!(config.strategies.is_none());
        assert_eq!(config.bonus_tiers, BonusTiers::default());
    }

    #[test]
    fn partial_strategies_table_keeps_missing_entry_empty() {
        let file = write_toml("[strategies]\ncalculate_revenue = \"simple\"\n");
        let strategies = load_config(file.path()).unwrap().strategies.unwrap();
        assert_eq!(strategies.calculate_revenue.as_deref(), Some("simple"));
        assert_eq!(strategies.calculate_bonus, None);
    }

    #[test]
    fn invalid_tier_fails_validation() {
        let file = write_toml("[bonus_tiers]\ndefault = 3\n");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
