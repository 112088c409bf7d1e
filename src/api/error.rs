use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid simulation parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid report options: {0}")]
    InvalidOptions(String),

    #[error("Failed to read payload: {0}")]
    Io(#[from] std::io::Error),
}

pub type PayloadResult<T> = Result<T, PayloadError>;
