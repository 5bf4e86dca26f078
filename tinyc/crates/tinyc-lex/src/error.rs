//! Scanner error types.
//!
//! Lexical problems in the source are tokens plus diagnostics, never errors.
//! [`LexError`] covers the failures of the scanner's two I/O endpoints.

use std::io;

use thiserror::Error;

/// An I/O failure while scanning.
#[derive(Debug, Error)]
pub enum LexError {
    /// Reading the source failed.
    #[error("failed to read source line {line}")]
    Read {
        /// Line that was being read.
        line: u32,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Writing to the listing sink failed.
    #[error("failed to write listing")]
    Listing(#[source] io::Error),
}

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, LexError>;
