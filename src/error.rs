//! Error types for cli-print

use thiserror::Error;

/// Errors that can occur while printing
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to or flushing the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for printing operations
pub type Result<T> = std::result::Result<T, Error>;
