//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and token dispatch
//! - `comment` - Whitespace and line comment skipping
//! - `name` - Name lexing
//! - `number` - Integer lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `phrase` - Raw phrase scanning up to a terminating period

mod comment;
mod core;
mod name;
mod number;
mod operator;
mod phrase;
mod string;

pub use core::Lexer;
