use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevMeterError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DevMeterError>;
