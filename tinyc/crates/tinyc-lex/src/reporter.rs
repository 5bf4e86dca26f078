//! Token reporter and listing sink.
//!
//! The listing is the scanner's human-readable output: numbered source
//! lines as they are read and one line per produced token. Both parts are
//! optional and controlled by [`ScanOptions`].

use std::fmt;
use std::io::Write;

use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};

/// Switches for the two parts of the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Echo every source line, prefixed by its number, as it is read.
    pub echo_source: bool,
    /// Print every token as it is produced.
    pub trace_scan: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            echo_source: true,
            trace_scan: true,
        }
    }
}

impl ScanOptions {
    /// Options with both echo and trace turned off.
    pub fn quiet() -> Self {
        Self {
            echo_source: false,
            trace_scan: false,
        }
    }
}

/// An append-only text sink for the listing.
///
/// A listing without a sink accepts and discards everything.
pub struct Listing<'a> {
    sink: Option<&'a mut dyn Write>,
    options: ScanOptions,
}

impl<'a> Listing<'a> {
    /// Creates a listing writing to `sink`.
    pub fn new(sink: &'a mut dyn Write, options: ScanOptions) -> Self {
        Self {
            sink: Some(sink),
            options,
        }
    }

    /// Creates a listing that writes nothing.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            options: ScanOptions::quiet(),
        }
    }

    /// Returns true if produced tokens should be reported.
    pub fn traces_tokens(&self) -> bool {
        self.sink.is_some() && self.options.trace_scan
    }

    /// Echoes one raw source line as `<lineno>: <text>`.
    pub fn echo_line(&mut self, lineno: u32, text: &str) -> Result<()> {
        if !self.options.echo_source {
            return Ok(());
        }
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let newline = if text.ends_with('\n') { "" } else { "\n" };
        write!(sink, "{}: {}{}", lineno, text, newline).map_err(LexError::Listing)
    }

    /// Writes the trace line for `token`.
    pub fn trace_token(&mut self, token: &Token) -> Result<()> {
        if !self.options.trace_scan {
            return Ok(());
        }
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        writeln!(sink, "\t{}: {}", token.line, token).map_err(LexError::Listing)
    }
}

impl fmt::Debug for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listing")
            .field("has_sink", &self.sink.is_some())
            .field("options", &self.options)
            .finish()
    }
}

/// Renders a token the way the trace listing shows it.
///
/// ```
/// use tinyc_lex::{Token, TokenKind};
///
/// assert_eq!(Token::new(TokenKind::Num, "42", 1).to_string(), "NUM, val= 42");
/// assert_eq!(Token::new(TokenKind::If, "if", 1).to_string(), "KEY, value= if");
/// ```
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndFile => match self.unterminated {
                Some(open) => write!(
                    f,
                    "EOF, {} not closed, started at line {}",
                    open.construct.name(),
                    open.line
                ),
                None => write!(f, "EOF"),
            },
            TokenKind::Error => write!(f, "ERROR: {}", self.lexeme),
            TokenKind::Num => write!(f, "NUM, val= {}", self.lexeme),
            TokenKind::Id => write!(f, "ID, name= {}", self.lexeme),
            TokenKind::IdFormatError => {
                write!(f, "ID '{}' doesn't conform to format.", self.lexeme)
            },
            TokenKind::Str => write!(f, "STR, val='{}'", self.lexeme),
            kind if kind.is_keyword() => write!(f, "KEY, value= {}", self.lexeme),
            _ => write!(f, "SYM, value= {}", self.lexeme),
        }
    }
}
