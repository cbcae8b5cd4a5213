use thiserror::Error;

use crate::config::ValidationError;

#[derive(Error, Debug)]
pub enum HmtlError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Encoding error: field '{field}' value {value} does not fit (max {max})")]
    EncodingRange {
        field: String,
        value: u64,
        max: u64,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Timed out waiting for '{waiting_for}'")]
    ProtocolTimeout { waiting_for: String },

    #[error("Device reported failure for '{command}'")]
    ProtocolFail { command: String },

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Cannot {action} while session is {state}")]
    InvalidState { state: String, action: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl HmtlError {
    pub fn encoding_range(field: impl Into<String>, value: u64, max: u64) -> Self {
        HmtlError::EncodingRange {
            field: field.into(),
            value,
            max,
        }
    }
}

pub type Result<T> = std::result::Result<T, HmtlError>;
