//! Error types for hello_bites

use thiserror::Error;

/// Result type alias for hello_bites operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing to an output channel
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The output channel rejected a write
    #[error("failed to write to output: {0}")]
    Io(#[from] std::io::Error),
}
