//! Error handling for the tinyc driver.
//!
//! Lexical problems in the scanned program are collected as diagnostics and
//! only surface here, as [`DriverError::LexicalErrors`], once scanning is
//! over.

use std::path::PathBuf;

use thiserror::Error;
use tinyc_lex::LexError;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The source file does not exist.
    #[error("File {} not found", .0.display())]
    SourceNotFound(PathBuf),

    /// Opening the source or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The scanner hit an I/O failure.
    #[error("Scan failed: {0}")]
    Lex(#[from] LexError),

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scanning finished but reported lexical errors.
    #[error("scanning found {count} lexical error(s)")]
    LexicalErrors {
        /// Number of error diagnostics.
        count: usize,
    },
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_display() {
        let err = DriverError::SourceNotFound(PathBuf::from("sample.tny"));
        assert_eq!(err.to_string(), "File sample.tny not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_lexical_errors_display() {
        let err = DriverError::LexicalErrors { count: 3 };
        assert_eq!(err.to_string(), "scanning found 3 lexical error(s)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
    }

    #[test]
    fn test_lex_error_conversion() {
        let lex_err = LexError::Listing(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        let err: DriverError = lex_err.into();
        assert_eq!(err.to_string(), "Scan failed: failed to write listing");
    }
}
