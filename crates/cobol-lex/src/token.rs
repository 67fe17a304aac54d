//! Token type definitions.

use std::fmt;

/// The category of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A name such as `WORKING-STORAGE` or `ITEM01`.
    Name,
    /// An unsigned run of digits, leading zeroes kept.
    Integer,
    /// A double-quoted literal, quotes stripped.
    String,
    /// One of `.`, `,`, `(`, `)`.
    Punctuation,
    /// One of `<`, `>`, `=`, `<=`, `>=`.
    Operator,
}

impl TokenType {
    /// Returns a lowercase name for the category.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Name => "name",
            TokenType::Integer => "integer",
            TokenType::String => "string",
            TokenType::Punctuation => "punctuation",
            TokenType::Operator => "operator",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit: the recognized text and its category.
///
/// # Example
///
/// ```
/// use cobol_lex::{Token, TokenType};
///
/// let token = Token::new("DIVISION", TokenType::Name);
/// assert_eq!(token.value(), "DIVISION");
/// assert_eq!(token.token_type(), TokenType::Name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    value: String,
    token_type: TokenType,
}

impl Token {
    /// Creates a token.
    pub fn new(value: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            value: value.into(),
            token_type,
        }
    }

    /// The recognized text. String tokens exclude their quotes.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The token category.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Returns true if the token has the given category and text.
    pub fn is(&self, token_type: TokenType, value: &str) -> bool {
        self.token_type == token_type && self.value == value
    }

    /// Consumes the token, returning its text.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_type {
            TokenType::String => write!(f, "\"{}\"", self.value),
            _ => f.write_str(&self.value),
        }
    }
}
