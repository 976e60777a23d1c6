//! Error types for the fill-down processor.

use thiserror::Error;

/// Errors that abort a fill-down run.
///
/// Every variant is fatal: processing stops at the first error and no
/// further rows are written.
#[derive(Debug, Error)]
pub enum UnmergeError {
    /// The column range is invalid (start past a fixed end).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The input delimiter pattern failed to compile.
    #[error("invalid input pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A row resolved to zero output columns.
    #[error("row {row}: row length less than one")]
    EmptyRow { row: usize },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UnmergeError>;
