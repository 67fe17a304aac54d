//! String literal lexing.
//!
//! Escapes are recognized but never decoded: a backslash followed by a
//! double quote keeps the literal open, and both characters stay in the
//! token value exactly as written.

use crate::chars::{ESCAPE, QUOTE};
use crate::error::{LexError, Result};
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// # Errors
    ///
    /// [`LexError::UnclosedString`] if end of input comes before an
    /// unescaped closing quote.
    pub(super) fn lex_string(&mut self) -> Result<Token> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            match self.cursor.current_char() {
                None => {
                    return Err(self.report(LexError::UnclosedString {
                        span: self.current_span(),
                    }));
                }
                Some(QUOTE) => {
                    let content = self.cursor.slice_from(content_start);
                    self.cursor.advance();
                    return Ok(Token::new(content, TokenType::String));
                }
                Some(ESCAPE) => {
                    self.cursor.advance();
                    self.cursor.match_char(QUOTE);
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }
}
