//! Lexical diagnostics.
//!
//! Every recoverable problem the scanner finds is also emitted to the
//! lexer's [`Handler`](tinyc_util::Handler) so the driver can render it
//! after scanning.

use std::io::BufRead;

use tinyc_util::{DiagnosticBuilder, DiagnosticCode};
use tracing::debug;

use crate::token::{Construct, Token, TokenKind, MAX_TOKEN_LEN};
use crate::Lexer;

impl<'a, R: BufRead> Lexer<'a, R> {
    /// Reports a lexical error on `line`.
    pub fn report_error(&self, code: DiagnosticCode, message: String, line: u32) {
        DiagnosticBuilder::error(message)
            .code(code)
            .line(line)
            .emit(self.handler);
    }

    /// Emits the diagnostic for an error token, if `token` is one.
    pub(super) fn report_token(&self, token: &Token) {
        match token.kind {
            TokenKind::Error if token.lexeme == ":" => {
                DiagnosticBuilder::error("expected `=` after `:`")
                    .code(DiagnosticCode::E_LEXER_MALFORMED_ASSIGN)
                    .line(token.line)
                    .help("did you mean `:=`?")
                    .emit(self.handler);
            },
            TokenKind::Error => self.report_error(
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                format!("unexpected character '{}'", token.lexeme),
                token.line,
            ),
            TokenKind::IdFormatError => self.report_error(
                DiagnosticCode::E_LEXER_MALFORMED_IDENT,
                format!("identifier '{}' doesn't conform to format", token.lexeme),
                token.line,
            ),
            _ => {},
        }
    }

    /// Reports a string or comment that reached end of input.
    pub(super) fn report_unterminated(&self, construct: Construct, start: u32) {
        debug!(construct = construct.name(), start, "unterminated construct");
        let (code, closing) = match construct {
            Construct::String => (DiagnosticCode::E_LEXER_UNTERMINATED_STRING, "'"),
            Construct::Comment => (DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT, "}"),
        };
        DiagnosticBuilder::error(format!("unterminated {}", construct.name()))
            .code(code)
            .line(start)
            .note(format!("{} started at line {}", construct.name(), start))
            .help(format!("add a closing `{}`", closing))
            .emit(self.handler);
    }

    /// Warns that `token`'s lexeme was cut to the length limit.
    pub(super) fn report_truncated(&self, token: &Token) {
        debug!(line = token.line, "lexeme truncated");
        DiagnosticBuilder::warning(format!(
            "token truncated to {} characters",
            MAX_TOKEN_LEN
        ))
        .code(DiagnosticCode::W_LEXER_TOKEN_TRUNCATED)
        .line(token.line)
        .emit(self.handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_util::{Diagnostic, Handler, Level};

    fn diagnostics(source: &str) -> Vec<Diagnostic> {
        let handler = Handler::new();
        {
            let mut lexer = Lexer::new(source.as_bytes(), &handler);
            while !lexer.next_token().unwrap().is_eof() {}
            lexer.next_token().unwrap();
        }
        handler.diagnostics()
    }

    #[test]
    fn test_clean_source_reports_nothing() {
        assert!(diagnostics("read x; { ok } write 'done'").is_empty());
    }

    #[test]
    fn test_unexpected_character() {
        let diags = diagnostics("x\n#");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diags[0].message, "unexpected character '#'");
        assert_eq!(diags[0].line, 2);
    }

    #[test]
    fn test_malformed_assign_has_help() {
        let diags = diagnostics("x : 1");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_MALFORMED_ASSIGN));
        assert_eq!(diags[0].helps, vec!["did you mean `:=`?"]);
    }

    #[test]
    fn test_unterminated_string_reported_once() {
        let diags = diagnostics("\n\n'abc\ndef");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
        assert_eq!(diags[0].line, 3);
        assert_eq!(diags[0].notes, vec!["string started at line 3"]);
    }

    #[test]
    fn test_unterminated_comment() {
        let diags = diagnostics("x { never closed");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
        );
        assert_eq!(diags[0].line, 1);
    }

    #[test]
    fn test_truncation_is_a_warning() {
        let source = "a".repeat(MAX_TOKEN_LEN + 10);
        let diags = diagnostics(&source);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].level, Level::Warning);
        assert_eq!(diags[0].code, Some(DiagnosticCode::W_LEXER_TOKEN_TRUNCATED));
    }

    #[test]
    fn test_long_unterminated_string_is_not_truncated() {
        let source = format!("'{}", "s".repeat(MAX_TOKEN_LEN + 5));
        let diags = diagnostics(&source);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].level, Level::Error);
        assert_eq!(
            diags[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
    }
}
