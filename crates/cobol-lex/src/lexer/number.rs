//! Integer lexing.

use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an unsigned integer.
    ///
    /// The digits are kept verbatim, leading zeroes included; no numeric
    /// value is computed, so there is no overflow.
    pub(super) fn lex_integer(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance_while(|c| c.is_ascii_digit());
        Token::new(self.cursor.slice_from(start), TokenType::Integer)
    }
}
