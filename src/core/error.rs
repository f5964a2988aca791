use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("API request failed: {0}")]
    Request(String),

    #[error("Malformed category record: {0}")]
    MalformedRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
