//! cobol-lex - Lexical scanner for a COBOL source dialect
//!
//! This crate turns COBOL-like source text into typed tokens. It also reads
//! "phrases": raw runs of text ended by a statement-terminating period, for
//! paragraphs such as `AUTHOR.` whose content does not follow the token
//! grammar.
//!
//! # Example Usage
//!
//! ```
//! use cobol_lex::{Lexer, Token, TokenType};
//!
//! let source = "* header comment\r\nIDENTIFICATION DIVISION.";
//! let mut lexer = Lexer::new(source);
//!
//! assert_eq!(
//!     lexer.next_token().unwrap(),
//!     Some(Token::new("IDENTIFICATION", TokenType::Name))
//! );
//!
//! // Or collect everything at once
//! let tokens = Lexer::new(source).tokenize().unwrap();
//! assert_eq!(tokens.len(), 3);
//!
//! // Phrases ignore the token grammar
//! let mut lexer = Lexer::new("A.J.LOPEZ.\r\n");
//! assert_eq!(lexer.next_phrase().as_deref(), Some("A.J.LOPEZ"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - ASCII character classes
//! - [`config`] - Scanner settings
//! - [`error`] - Error types
//! - [`span`] - Source locations
//!
//! # Token Grammar
//!
//! Whitespace (space, tab, CR, LF) separates tokens. A `*` where a token
//! would start opens a line comment running to the end of the line.
//!
//! - **Name**: `[A-Za-z][A-Za-z0-9-]*`, e.g. `WORKING-STORAGE`
//! - **Integer**: `[0-9]+`, leading zeroes kept, e.g. `003`
//! - **String**: `"..."`; `\"` does not close the literal and is kept as written
//! - **Punctuation**: `.`, `,`, `(`, `)`
//! - **Operator**: `<`, `>`, `=`, `<=`, `>=`
//!
//! Any other character is an error: `unexpected '<ch>'`. A string with no
//! closing quote is the error `unclosed string`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod span;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError, LexErrorKind, Result};
pub use lexer::Lexer;
pub use span::Span;
pub use token::{Token, TokenType};
