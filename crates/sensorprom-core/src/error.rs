//! Shared error type across sensorprom crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Metric definition or usage does not match its schema.
    InvalidMetric,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidMetric => "INVALID_METRIC",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SensorPromError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error, PartialEq)]
pub enum SensorPromError {
    #[error("duplicate metric name: {0}")]
    DuplicateName(String),
    #[error("label arity mismatch for {metric}: expected {expected} values, got {got}")]
    LabelArity {
        metric: String,
        expected: usize,
        got: usize,
    },
    #[error("invalid name: {0}")]
    InvalidName(String),
    #[error("invalid buckets: {0}")]
    InvalidBuckets(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SensorPromError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SensorPromError::DuplicateName(_)
            | SensorPromError::LabelArity { .. }
            | SensorPromError::InvalidName(_)
            | SensorPromError::InvalidBuckets(_) => ClientCode::InvalidMetric,
            SensorPromError::BadRequest(_) => ClientCode::BadRequest,
            SensorPromError::Internal(_) => ClientCode::Internal,
        }
    }
}
