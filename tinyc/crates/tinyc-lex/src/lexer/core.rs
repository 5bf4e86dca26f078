//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the DFA driving it and the
//! session state that survives between calls.

use std::io::BufRead;

use tinyc_util::Handler;
use tracing::trace;

use crate::error::Result;
use crate::line_buffer::LineBuffer;
use crate::reporter::Listing;
use crate::token::{Construct, Token, TokenKind, Unterminated, MAX_TOKEN_LEN};

/// States of the scanning automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    InAssign,
    InComment,
    InNum,
    InString,
    InId,
    InGt,
    InLt,
    Done,
}

/// Lexer for the TINY language.
///
/// Each call to [`next_token`](Lexer::next_token) runs the DFA from its
/// start state until one token is complete, pulling characters from a
/// [`LineBuffer`]. Whether the last string and comment were closed, and the
/// line on which the last one opened, are kept across calls so that an
/// end-of-input token can say what was left open.
///
/// # Example
///
/// ```
/// use tinyc_lex::{Lexer, TokenKind};
/// use tinyc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("x := 1".as_bytes(), &handler);
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Id);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Num);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndFile);
/// ```
pub struct Lexer<'a, R> {
    /// Character source.
    buffer: LineBuffer<R>,

    /// Listing sink for echoed lines and traced tokens.
    listing: Listing<'a>,

    /// Error handler for reporting lexical errors.
    pub(super) handler: &'a Handler,

    /// False while the most recently opened string is unclosed.
    string_closed: bool,

    /// False while the most recently opened comment is unclosed.
    comment_closed: bool,

    /// Line on which the most recent string or comment opened.
    open_line: u32,
}

impl<'a, R: BufRead> Lexer<'a, R> {
    /// Creates a lexer that writes no listing.
    pub fn new(reader: R, handler: &'a Handler) -> Self {
        Self::with_listing(reader, Listing::disabled(), handler)
    }

    /// Creates a lexer that echoes lines and traces tokens to `listing`.
    pub fn with_listing(reader: R, listing: Listing<'a>, handler: &'a Handler) -> Self {
        Self {
            buffer: LineBuffer::new(reader),
            listing,
            handler,
            string_closed: true,
            comment_closed: true,
            open_line: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Lexical problems never fail this call: they come back as
    /// [`TokenKind::Error`] or [`TokenKind::IdFormatError`] tokens and are
    /// reported to the handler. Once [`TokenKind::EndFile`] has been
    /// returned, every later call returns it again.
    ///
    /// # Errors
    ///
    /// Fails only if reading the source or writing the listing fails.
    pub fn next_token(&mut self) -> Result<Token> {
        let mut state = State::Start;
        let mut kind = TokenKind::EndFile;
        let mut lexeme = String::new();
        let mut stored = 0usize;
        let mut truncated = false;
        let mut line = self.buffer.line();

        while state != State::Done {
            let c = self.buffer.next_char(&mut self.listing)?;
            let mut save = true;

            match state {
                State::Start => {
                    line = self.buffer.line();
                    match c {
                        None => {
                            save = false;
                            state = State::Done;
                            kind = TokenKind::EndFile;
                        },
                        Some(c) if c.is_ascii_digit() => state = State::InNum,
                        Some(c) if c.is_ascii_alphabetic() => state = State::InId,
                        Some(':') => state = State::InAssign,
                        Some('>') => state = State::InGt,
                        Some('<') => state = State::InLt,
                        Some(' ' | '\t' | '\n' | '\r') => save = false,
                        Some('{') => {
                            save = false;
                            state = State::InComment;
                            self.comment_closed = false;
                            self.open_line = line;
                        },
                        Some('\'') => {
                            save = false;
                            state = State::InString;
                            kind = TokenKind::Str;
                            self.string_closed = false;
                            self.open_line = line;
                        },
                        Some(c) => {
                            state = State::Done;
                            kind = TokenKind::from_symbol(c).unwrap_or(TokenKind::Error);
                        },
                    }
                },
                State::InComment => {
                    save = false;
                    match c {
                        None => {
                            state = State::Done;
                            kind = TokenKind::EndFile;
                            line = self.buffer.line();
                            self.report_unterminated(Construct::Comment, self.open_line);
                        },
                        Some('}') => {
                            state = State::Start;
                            self.comment_closed = true;
                        },
                        Some(_) => {},
                    }
                },
                State::InString => match c {
                    None => {
                        save = false;
                        state = State::Done;
                        kind = TokenKind::EndFile;
                        line = self.buffer.line();
                        self.report_unterminated(Construct::String, self.open_line);
                    },
                    Some('\'') => {
                        save = false;
                        state = State::Done;
                        self.string_closed = true;
                    },
                    Some(_) => {},
                },
                State::InAssign => {
                    state = State::Done;
                    if c == Some('=') {
                        kind = TokenKind::Assign;
                    } else {
                        self.buffer.pushback();
                        save = false;
                        kind = TokenKind::Error;
                    }
                },
                State::InLt => {
                    state = State::Done;
                    if c == Some('=') {
                        kind = TokenKind::Le;
                    } else {
                        self.buffer.pushback();
                        save = false;
                        kind = TokenKind::Lt;
                    }
                },
                State::InGt => {
                    state = State::Done;
                    if c == Some('=') {
                        kind = TokenKind::Ge;
                    } else {
                        self.buffer.pushback();
                        save = false;
                        kind = TokenKind::Gt;
                    }
                },
                State::InNum => {
                    if !matches!(c, Some(d) if d.is_ascii_digit()) {
                        self.buffer.pushback();
                        save = false;
                        state = State::Done;
                        kind = TokenKind::Num;
                    }
                },
                State::InId => {
                    if !matches!(c, Some(d) if d.is_ascii_alphanumeric()) {
                        self.buffer.pushback();
                        save = false;
                        state = State::Done;
                        kind = TokenKind::Id;
                    }
                },
                State::Done => break,
            }

            if let (true, Some(c)) = (save, c) {
                if stored < MAX_TOKEN_LEN {
                    lexeme.push(c);
                    stored += 1;
                } else {
                    truncated = true;
                }
            }
        }

        if kind == TokenKind::Id {
            kind = self.classify_identifier(&lexeme);
        }

        let token = if kind == TokenKind::EndFile {
            // An open string's partial body never reaches the EOF token.
            Token::end_of_input(line, self.unterminated())
        } else {
            Token::new(kind, lexeme, line)
        };

        self.report_token(&token);
        if truncated && !token.is_eof() {
            self.report_truncated(&token);
        }

        trace!(kind = ?token.kind, lexeme = %token.lexeme, line = token.line, "token");
        if self.listing.traces_tokens() {
            self.listing.trace_token(&token)?;
        }

        Ok(token)
    }

    /// Returns the construct left open at end of input, if any.
    ///
    /// An open string takes precedence over an open comment.
    pub fn unterminated(&self) -> Option<Unterminated> {
        let construct = if !self.string_closed {
            Construct::String
        } else if !self.comment_closed {
            Construct::Comment
        } else {
            return None;
        };
        Some(Unterminated {
            construct,
            line: self.open_line,
        })
    }

    /// Returns true unless the most recently opened string is unclosed.
    pub fn string_closed(&self) -> bool {
        self.string_closed
    }

    /// Returns true unless the most recently opened comment is unclosed.
    pub fn comment_closed(&self) -> bool {
        self.comment_closed
    }

    /// Returns the number of physical lines read so far.
    pub fn line(&self) -> u32 {
        self.buffer.line()
    }
}

impl<'a, R: BufRead> Iterator for Lexer<'a, R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}
