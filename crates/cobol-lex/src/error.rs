//! Error types for cobol-lex.
//!
//! Scanning fails in exactly two ways, both reported through [`LexError`].
//! The display strings are stable and form part of the public contract.

use thiserror::Error;

use crate::span::Span;

/// Error raised by [`Lexer::next_token`](crate::Lexer::next_token).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input reached before a string literal's closing quote.
    #[error("unclosed string")]
    UnclosedString {
        /// Span from the opening quote to end of input
        span: Span,
    },

    /// A character that starts no token.
    #[error("unexpected '{ch}'")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Location of the offending character
        span: Span,
    },
}

/// Category of a [`LexError`], for callers that do not need the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// See [`LexError::UnclosedString`].
    UnclosedString,
    /// See [`LexError::UnexpectedCharacter`].
    UnexpectedCharacter,
}

impl LexError {
    /// Returns the error category.
    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::UnclosedString { .. } => LexErrorKind::UnclosedString,
            LexError::UnexpectedCharacter { .. } => LexErrorKind::UnexpectedCharacter,
        }
    }

    /// Returns where in the source the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnclosedString { span } | LexError::UnexpectedCharacter { span, .. } => {
                *span
            }
        }
    }
}

/// Error raised when a [`LexerConfig`](crate::LexerConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The comment indicator collides with the token grammar.
    #[error("invalid comment indicator '{0}': character already starts a token or is whitespace")]
    InvalidCommentIndicator(char),
}

/// Result type alias for scanning operations.
pub type Result<T> = std::result::Result<T, LexError>;
