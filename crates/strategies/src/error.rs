use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Strategy received invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Strategy of type '{0}' not found or implemented")]
    StrategyNotFound(String),
}

impl From<core_types::CoreError> for StrategyError {
    fn from(err: core_types::CoreError) -> Self {
        match err {
            core_types::CoreError::UnknownStrategy(name) => StrategyError::StrategyNotFound(name),
            other => StrategyError::InvalidParameters(other.to_string()),
        }
    }
}
