//! Reserved-word table.
//!
//! The table is fixed: it is built once, on first use, and never changes.
//! Lookup is an exact, case-sensitive match.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Every reserved word of the language with the kind it scans to.
pub const RESERVED_WORDS: [(&str, TokenKind); 20] = [
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("end", TokenKind::End),
    ("repeat", TokenKind::Repeat),
    ("until", TokenKind::Until),
    ("read", TokenKind::Read),
    ("write", TokenKind::Write),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("or", TokenKind::Or),
    ("and", TokenKind::And),
    ("not", TokenKind::Not),
    ("int", TokenKind::Int),
    ("bool", TokenKind::Bool),
    ("string", TokenKind::String),
    ("float", TokenKind::Float),
    ("double", TokenKind::Double),
    ("do", TokenKind::Do),
    ("while", TokenKind::While),
];

lazy_static! {
    static ref RESERVED: FxHashMap<&'static str, TokenKind> =
        RESERVED_WORDS.iter().copied().collect();
}

/// Looks up an identifier-shaped lexeme in the reserved-word table.
///
/// Returns `None` if the lexeme is not a reserved word.
///
/// # Example
///
/// ```
/// use tinyc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(lexeme: &str) -> Option<TokenKind> {
    RESERVED.get(lexeme).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reserved_word_resolves() {
        for (word, kind) in RESERVED_WORDS {
            assert_eq!(keyword_from_ident(word), Some(kind), "{}", word);
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_table_has_no_duplicates() {
        assert_eq!(RESERVED.len(), RESERVED_WORDS.len());
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(keyword_from_ident("IF"), None);
        assert_eq!(keyword_from_ident("Repeat"), None);
        assert_eq!(keyword_from_ident("repeat"), Some(TokenKind::Repeat));
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(keyword_from_ident("whilex"), None);
        assert_eq!(keyword_from_ident("whil"), None);
        assert_eq!(keyword_from_ident("do1"), None);
        assert_eq!(keyword_from_ident(""), None);
    }
}
