//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! scanner diagnostics (errors and warnings).
//!
//! # Examples
//!
//! ```
//! use tinyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("malformed assignment")
//!     .code(DiagnosticCode::E_LEXER_MALFORMED_ASSIGN)
//!     .line(1)
//!     .help("did you mean `:=`?")
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag);
//!     }
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use tinyc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A problem with the source text
    Error,
    /// Something worth reporting that is not an error
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source line the diagnostic refers to (1-based, 0 when unknown)
    pub line: u32,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic without code, notes or helps
    pub fn new(level: Level, message: impl Into<String>, line: u32) -> Self {
        Self {
            level,
            message: message.into(),
            line,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Error, message, line)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Warning, message, line)
    }
}

/// Renders the diagnostic in the usual compiler layout:
///
/// ```text
/// error[E1001]: unexpected character '#'
///   --> line 3
///   = help: ...
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.line > 0 {
            write!(f, "\n  --> line {}", self.line)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. Emission only needs a shared reference, so one handler can
/// be lent to a phase while the driver keeps reading it afterwards.
///
/// # Examples
///
/// ```
/// use tinyc_util::diagnostic::{Diagnostic, Handler};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character '#'", 2));
///
/// assert_eq!(handler.error_count(), 1);
/// assert_eq!(handler.warning_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a snapshot of all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test", 4);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert_eq!(diag.line, 4);
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_diagnostic_warning() {
        let diag = Diagnostic::warning("warning message", 1);
        assert_eq!(diag.level, Level::Warning);
    }

    #[test]
    fn test_display_with_code_and_line() {
        let mut diag = Diagnostic::error("unexpected character '#'", 3);
        diag.code = Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(
            diag.to_string(),
            "error[E1001]: unexpected character '#'\n  --> line 3"
        );
    }

    #[test]
    fn test_display_without_line() {
        let diag = Diagnostic::warning("something odd", 0);
        assert_eq!(diag.to_string(), "warning: something odd");
    }

    #[test]
    fn test_display_notes_and_helps() {
        let mut diag = Diagnostic::error("unterminated string", 2);
        diag.notes.push("string starts at line 2".to_string());
        diag.helps.push("add a closing `'`".to_string());
        let text = diag.to_string();
        assert!(text.contains("\n  = note: string starts at line 2"));
        assert!(text.ends_with("\n  = help: add a closing `'`"));
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());

        handler.emit_diagnostic(Diagnostic::error("a", 1));
        handler.emit_diagnostic(Diagnostic::warning("b", 1));
        handler.emit_diagnostic(Diagnostic::error("c", 2));

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_preserves_order() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("first", 1));
        handler.emit_diagnostic(Diagnostic::error("second", 2));
        let messages: Vec<_> = handler
            .diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
