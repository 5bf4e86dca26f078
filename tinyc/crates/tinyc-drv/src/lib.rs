//! tinyc-drv - Driver for the TINY scanner
//!
//! Runs the scanner over one source file the way the TINY compiler does in
//! scan-only mode: a `TINY COMPILATION` header, the numbered source lines
//! and the token trace go to the listing, and the collected diagnostics are
//! rendered afterwards.
//!
//! # Example
//!
//! ```
//! use tinyc_drv::{Config, Session};
//!
//! let session = Session::new(Config::default());
//! let mut listing = Vec::new();
//! let summary = session
//!     .scan_source("inline", "x := 1".as_bytes(), &mut listing)
//!     .unwrap();
//!
//! assert_eq!(summary.tokens, 3);
//! assert!(session.check().is_ok());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;

pub use config::{Config, ScanConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tinyc_lex::{Lexer, Listing, ScanOptions, Unterminated};
use tinyc_util::Handler;
use tracing::{debug, info};

/// What one scan saw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Tokens produced, not counting the final end-of-input token.
    pub tokens: usize,
    /// Physical source lines read.
    pub lines: u32,
    /// `Error` and `IdFormatError` tokens among `tokens`.
    pub error_tokens: usize,
    /// Construct left open at end of input, if any.
    pub unterminated: Option<Unterminated>,
}

/// A scanning session: configuration plus the diagnostics it collects.
pub struct Session {
    config: Config,
    diagnostics: Handler,
}

impl Session {
    /// Creates a session with an empty diagnostic handler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the diagnostics collected so far.
    pub fn handler(&self) -> &Handler {
        &self.diagnostics
    }

    /// Returns the listing options in effect.
    pub fn options(&self) -> ScanOptions {
        self.config.options()
    }

    /// Appends the configured extension to `input` if its file name has no
    /// `.` in it.
    pub fn resolve_source_path(&self, input: &Path) -> PathBuf {
        let has_dot = input
            .file_name()
            .map(|name| name.to_string_lossy().contains('.'))
            .unwrap_or(false);
        if has_dot || self.config.extension.is_empty() {
            return input.to_path_buf();
        }
        let mut name = OsString::from(input.as_os_str());
        name.push(".");
        name.push(&self.config.extension);
        PathBuf::from(name)
    }

    /// Scans a source file, writing the listing to `out`.
    pub fn scan_file(&self, input: &Path, out: &mut dyn Write) -> Result<ScanSummary> {
        let path = self.resolve_source_path(input);
        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DriverError::SourceNotFound(path.clone()),
            _ => DriverError::Io(e),
        })?;

        write!(out, "\nTINY COMPILATION: {}\n\n", path.display())?;
        self.scan_source(&path.display().to_string(), BufReader::new(file), out)
    }

    /// Scans `reader` until end of input, writing the listing to `out`.
    pub fn scan_source<R: BufRead>(
        &self,
        name: &str,
        reader: R,
        out: &mut dyn Write,
    ) -> Result<ScanSummary> {
        debug!(source = name, options = ?self.options(), "scanning");

        let listing = Listing::new(out, self.options());
        let mut lexer = Lexer::with_listing(reader, listing, &self.diagnostics);
        let mut summary = ScanSummary::default();

        loop {
            let token = lexer.next_token()?;
            if token.is_eof() {
                summary.unterminated = token.unterminated;
                break;
            }
            summary.tokens += 1;
            if token.kind.is_error() {
                summary.error_tokens += 1;
            }
        }
        summary.lines = lexer.line();

        info!(
            source = name,
            tokens = summary.tokens,
            lines = summary.lines,
            errors = summary.error_tokens,
            "scan finished"
        );
        Ok(summary)
    }

    /// Writes every collected diagnostic to `out`, one block per diagnostic.
    pub fn render_diagnostics(&self, out: &mut dyn Write) -> io::Result<()> {
        for diagnostic in self.diagnostics.diagnostics() {
            writeln!(out, "{}", diagnostic)?;
        }
        Ok(())
    }

    /// Fails if any error-level diagnostic has been reported.
    pub fn check(&self) -> Result<()> {
        match self.diagnostics.error_count() {
            0 => Ok(()),
            count => Err(DriverError::LexicalErrors { count }),
        }
    }
}
