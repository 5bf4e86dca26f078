//! Lexer module.
//!
//! The lexer implementation is split into:
//! - `core` - Lexer struct, session state and the DFA
//! - `classify` - Reclassification of identifier-shaped lexemes
//! - `diagnostics` - Reporting of lexical problems to the handler

mod classify;
mod core;
mod diagnostics;

pub use core::Lexer;
