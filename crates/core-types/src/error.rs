use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dataset is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed record in collection '{0}': {1}")]
    MalformedRecord(String, String),

    #[error("Unknown strategy name '{0}'")]
    UnknownStrategy(String),
}
