//! Error types for the Falx library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`FalxError`] enum. Failures are synchronous and never leave the engine in
//! a partially mutated state.
//!
//! # Examples
//!
//! ```
//! use falx::error::{FalxError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FalxError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Falx operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum FalxError {
    /// A caller-supplied argument was rejected (negative or duplicate
    /// document id, malformed query token, invalid stop word, a token
    /// containing control characters).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation referenced a document id that is not present where
    /// absence is not defined as a no-op.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Analysis-related errors (tokenization, stop-word handling).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors (parsing, invalid queries).
    #[error("Query error: {0}")]
    Query(String),

    /// Index-related errors.
    #[error("Index error: {0}")]
    Index(String),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FalxError.
pub type Result<T> = std::result::Result<T, FalxError>;

impl FalxError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FalxError::InvalidArgument(msg.into())
    }

    /// Create a new out of range error.
    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        FalxError::OutOfRange(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        FalxError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        FalxError::Query(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        FalxError::Index(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FalxError::invalid_argument("Test invalid argument");
        assert_eq!(error.to_string(), "Invalid argument: Test invalid argument");

        let error = FalxError::out_of_range("Test out of range");
        assert_eq!(error.to_string(), "Out of range: Test out of range");

        let error = FalxError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let falx_error = FalxError::from(io_error);

        match falx_error {
            FalxError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
