//! Error types for calculator validation and batch loading

use thiserror::Error;

/// Raised when calculator inputs are non-positive or logically inconsistent.
///
/// This is the only failure a calculator can produce. It is returned before
/// any formula is evaluated, so a failed call never yields partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidInputError {
    message: String,
}

impl InvalidInputError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Human-readable description of the violated constraint
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result alias used by every calculator
pub type Result<T> = std::result::Result<T, InvalidInputError>;

/// Errors raised while reading calculator requests or defaults from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown calculator '{name}' on row {row}")]
    UnknownCalculator { name: String, row: usize },

    #[error("Missing column '{column}' for {calculator} on row {row}")]
    MissingField {
        calculator: &'static str,
        column: &'static str,
        row: usize,
    },

    #[error("Unsupported request file extension: {0}")]
    UnsupportedFormat(String),
}
