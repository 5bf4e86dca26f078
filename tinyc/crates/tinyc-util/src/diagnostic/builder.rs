//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API.

use super::{Diagnostic, DiagnosticCode, Handler, Level};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use tinyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
///
/// let diag = DiagnosticBuilder::new(Level::Error, "unterminated string")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .line(7)
///     .note("the string starts at line 7")
///     .build();
///
/// assert_eq!(diag.line, 7);
/// assert_eq!(diag.notes.len(), 1);
/// ```
#[derive(Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    line: u32,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: 0,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source line (1-based)
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            line: self.line,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("oops").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "oops");
        assert_eq!(diag.line, 0);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_builder_all_fields() {
        let diag = DiagnosticBuilder::warning("token truncated")
            .code(DiagnosticCode::W_LEXER_TOKEN_TRUNCATED)
            .line(12)
            .note("first note")
            .note("second note")
            .help("shorten the identifier")
            .build();

        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.code, Some(DiagnosticCode::W_LEXER_TOKEN_TRUNCATED));
        assert_eq!(diag.line, 12);
        assert_eq!(diag.notes, vec!["first note", "second note"]);
        assert_eq!(diag.helps, vec!["shorten the identifier"]);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("bad")
            .line(1)
            .emit(&handler);
        DiagnosticBuilder::warning("meh").emit(&handler);

        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "bad");
    }
}
