//! Identifier reclassification.
//!
//! Runs once the DFA has finished an identifier-shaped lexeme: reserved
//! words become keyword tokens, and anything the identifier validator
//! rejects becomes an identifier-format error.

use std::io::BufRead;

use crate::ident::is_well_formed;
use crate::keywords::keyword_from_ident;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a, R: BufRead> Lexer<'a, R> {
    /// Classifies a lexeme the DFA accepted as an identifier.
    ///
    /// # Returns
    ///
    /// The keyword kind if the lexeme is reserved, otherwise
    /// [`TokenKind::Id`] or [`TokenKind::IdFormatError`].
    pub fn classify_identifier(&self, lexeme: &str) -> TokenKind {
        if let Some(keyword) = keyword_from_ident(lexeme) {
            return keyword;
        }
        if is_well_formed(lexeme) {
            TokenKind::Id
        } else {
            TokenKind::IdFormatError
        }
    }
}
