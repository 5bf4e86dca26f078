//! Token definitions for the TINY language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme it was scanned from and
//! the line on which it starts. Tokens are plain values: once the lexer has
//! returned one, nothing about it changes.

/// Maximum number of characters stored in a token's lexeme.
///
/// Longer lexemes are consumed in full from the input but only their first
/// `MAX_TOKEN_LEN` characters are kept.
pub const MAX_TOKEN_LEN: usize = 255;

/// The closed set of token kinds produced by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Book-keeping =====
    /// End of input
    EndFile,
    /// Unrecognized or malformed character sequence
    Error,

    // ===== Reserved words =====
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `end`
    End,
    /// `repeat`
    Repeat,
    /// `until`
    Until,
    /// `read`
    Read,
    /// `write`
    Write,
    /// `true`
    True,
    /// `false`
    False,
    /// `or`
    Or,
    /// `and`
    And,
    /// `not`
    Not,
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `do`
    Do,
    /// `while`
    While,

    // ===== Multi-character tokens =====
    /// Identifier
    Id,
    /// Identifier-shaped lexeme rejected by the identifier validator
    IdFormatError,
    /// Decimal numeral
    Num,
    /// Quoted string literal (lexeme excludes the quotes)
    Str,

    // ===== Special symbols =====
    /// `:=`
    Assign,
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Over,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semi,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `,`
    Comma,
    /// `'`
    Quote,
    /// `%`
    Percent,
}

impl TokenKind {
    /// Maps a one-character symbol to its token kind.
    ///
    /// Only symbols that are complete on their own are recognized here;
    /// `:`, `<`, `>` and `'` need more context and are handled by the DFA.
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Eq,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Times,
            '/' => TokenKind::Over,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semi,
            ',' => TokenKind::Comma,
            '%' => TokenKind::Percent,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for reserved-word kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Or
                | TokenKind::And
                | TokenKind::Not
                | TokenKind::Int
                | TokenKind::Bool
                | TokenKind::String
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Do
                | TokenKind::While
        )
    }

    /// Returns true for operator and punctuation kinds.
    pub fn is_symbol(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Eq
                | TokenKind::Lt
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Times
                | TokenKind::Over
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Semi
                | TokenKind::Gt
                | TokenKind::Le
                | TokenKind::Ge
                | TokenKind::Comma
                | TokenKind::Quote
                | TokenKind::Percent
        )
    }

    /// Returns true for the two recoverable error kinds.
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::IdFormatError)
    }
}

/// A delimited construct that can span lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Construct {
    /// `'...'`
    String,
    /// `{...}`
    Comment,
}

impl Construct {
    /// Lower-case name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Construct::String => "string",
            Construct::Comment => "comment",
        }
    }
}

/// A string or comment that was still open when the input ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unterminated {
    /// Which construct was left open.
    pub construct: Construct,
    /// Line of the opening delimiter.
    pub line: u32,
}

/// A classified lexical unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Source characters of the token, at most [`MAX_TOKEN_LEN`] of them.
    pub lexeme: String,
    /// Line of the token's first character.
    pub line: u32,
    /// Set only on [`TokenKind::EndFile`] when input ended inside a string
    /// or comment.
    pub unterminated: Option<Unterminated>,
}

impl Token {
    /// Creates a token with no end-of-input annotation.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            unterminated: None,
        }
    }

    /// Creates an end-of-input token.
    pub fn end_of_input(line: u32, unterminated: Option<Unterminated>) -> Self {
        Self {
            kind: TokenKind::EndFile,
            lexeme: String::new(),
            line,
            unterminated,
        }
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndFile
    }
}
