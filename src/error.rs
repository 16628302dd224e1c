//! Error types for the lunch orders library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the lunch orders library
///
/// Date resolution never produces one of these; only strict parsing of
/// stored dates and the order store can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text that is not a `YYYY-MM-DD` calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Order quantity must be positive
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Store file is unreadable or inconsistent
    #[error("Store error at {}: {message}", .path.display())]
    Store { path: PathBuf, message: String },
}
