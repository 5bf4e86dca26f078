//! Identifier validation.
//!
//! The DFA only ever accumulates letters and digits into an identifier, so
//! under the current transition rules every lexeme handed to
//! [`is_well_formed`] passes. The check is still run on every non-keyword
//! identifier and its failure is reported as
//! [`TokenKind::IdFormatError`](crate::TokenKind::IdFormatError).

/// Returns true if `lexeme` has the shape of a TINY identifier.
///
/// The first character is assumed to be a letter (the DFA only enters the
/// identifier state on one); every following character must be an ASCII
/// letter or digit. An empty lexeme is rejected.
///
/// # Example
///
/// ```
/// use tinyc_lex::ident::is_well_formed;
///
/// assert!(is_well_formed("x1"));
/// assert!(!is_well_formed("x_1"));
/// ```
pub fn is_well_formed(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(_) => chars.all(|c| c.is_ascii_alphanumeric()),
        None => false,
    }
}
