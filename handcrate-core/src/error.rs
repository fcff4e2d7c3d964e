//! Error types for handcrate

use thiserror::Error;

/// Main error type for handcrate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid landmark count: expected {expected}, found {found}")]
    InvalidLandmarkCount { expected: usize, found: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for handcrate operations
pub type Result<T> = std::result::Result<T, Error>;
