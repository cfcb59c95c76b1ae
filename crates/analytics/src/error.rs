use thiserror::Error;

/// Reasons a sales report cannot be computed.
///
/// All but `AmountOverflow` are detected before any aggregation starts. Unknown
/// seller ids and unknown SKUs inside otherwise valid data are not errors; those
/// entries are skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Invalid input: purchase records are missing or empty")]
    MissingPurchaseData,

    #[error("Invalid input: product catalog is missing or empty")]
    MissingProductData,

    #[error("Invalid input: seller roster is missing or empty")]
    MissingSellerData,

    #[error("Invalid options: configuration is missing or is not a table")]
    InvalidConfiguration,

    #[error("Invalid options: strategy '{0}' is not provided")]
    MissingStrategy(String),

    #[error("Invalid options: strategy '{0}' does not resolve to a callable strategy")]
    StrategyNotCallable(String),

    #[error("Arithmetic overflow while totalling seller '{0}'")]
    AmountOverflow(String),
}
