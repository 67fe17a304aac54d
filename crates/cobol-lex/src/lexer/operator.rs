//! Operator and punctuation lexing.

use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a single punctuation character.
    ///
    /// Handles: `.`, `,`, `(`, `)`
    pub(super) fn lex_punctuation(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        Token::new(self.cursor.slice_from(start), TokenType::Punctuation)
    }

    /// Lexes a comparison operator, preferring the two-character forms.
    ///
    /// Handles: `<`, `<=`, `>`, `>=`, `=`
    pub(super) fn lex_operator(&mut self) -> Token {
        let start = self.cursor.position();
        if let Some('<' | '>') = self.cursor.advance() {
            self.cursor.match_char('=');
        }
        Token::new(self.cursor.slice_from(start), TokenType::Operator)
    }
}
