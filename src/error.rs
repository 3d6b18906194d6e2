//! Error types for roster storage and operations.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A create-time predicate rejected a field value.
    #[error("invalid value for field '{field}'")]
    Validation { field: String },

    /// No record with the given identifier exists anywhere in the hierarchy.
    #[error("player '{0}' not found")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn validation(field: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
