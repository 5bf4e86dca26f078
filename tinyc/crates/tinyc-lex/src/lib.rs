//! tinyc-lex - Scanner for the TINY language
//!
//! This crate turns TINY source text into a stream of classified tokens.
//! It reads its input one physical line at a time and drives a small
//! deterministic automaton over the characters of each line.
//!
//! # Example Usage
//!
//! ```
//! use tinyc_lex::{Lexer, TokenKind};
//! use tinyc_util::Handler;
//!
//! let source = "read x; { input } if 0 < x then write x end";
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(source.as_bytes(), &handler);
//!
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Read);
//!
//! // The rest, up to (not including) end of input
//! let rest: Vec<_> = lexer.map(|t| t.unwrap().kind).collect();
//! assert_eq!(rest.len(), 10);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the token value
//! - [`keywords`] - Reserved-word table
//! - [`ident`] - Identifier validator
//! - [`line_buffer`] - Line-oriented character source with pushback
//! - [`lexer`] - The DFA tokenizer
//! - [`reporter`] - Source echo and token trace listing
//!
//! # Token Categories
//!
//! **Reserved words** (20): `if`, `then`, `else`, `end`, `repeat`, `until`,
//! `read`, `write`, `true`, `false`, `or`, `and`, `not`, `int`, `bool`,
//! `string`, `float`, `double`, `do`, `while`
//!
//! **Identifiers**: a letter followed by letters and digits
//!
//! **Numerals**: one or more decimal digits
//!
//! **Strings**: `'...'`, may span lines, no escapes
//!
//! **Symbols**: `:=`, `=`, `<`, `<=`, `>`, `>=`, `+`, `-`, `*`, `/`, `%`,
//! `(`, `)`, `;`, `,`
//!
//! **Comments**: `{ ... }`, may span lines, produce no token

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod ident;
pub mod keywords;
pub mod lexer;
pub mod line_buffer;
pub mod reporter;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, Result};
pub use keywords::{keyword_from_ident, RESERVED_WORDS};
pub use lexer::Lexer;
pub use line_buffer::LineBuffer;
pub use reporter::{Listing, ScanOptions};
pub use token::{Construct, Token, TokenKind, Unterminated, MAX_TOKEN_LEN};
