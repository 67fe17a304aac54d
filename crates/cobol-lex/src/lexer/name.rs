//! Name lexing.

use crate::chars::is_name_continue;
use crate::token::{Token, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a name: an ASCII letter followed by letters, digits and hyphens.
    ///
    /// The value keeps its original case.
    pub(super) fn lex_name(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.advance_while(is_name_continue);
        Token::new(self.cursor.slice_from(start), TokenType::Name)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenType};

    fn names(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    fn name(value: &str) -> Token {
        Token::new(value, TokenType::Name)
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(names("DIVISION"), vec![name("DIVISION")]);
    }

    #[test]
    fn test_name_with_spaces() {
        assert_eq!(names("  DIVISION  "), vec![name("DIVISION")]);
    }

    #[test]
    fn test_name_with_digits() {
        assert_eq!(names("ITEM01"), vec![name("ITEM01")]);
    }

    #[test]
    fn test_two_names() {
        assert_eq!(
            names("IDENTIFICATION DIVISION"),
            vec![name("IDENTIFICATION"), name("DIVISION")]
        );
    }

    #[test]
    fn test_name_with_hyphen() {
        assert_eq!(names("WORKING-STORAGE"), vec![name("WORKING-STORAGE")]);
        assert_eq!(names("END-"), vec![name("END-")]);
    }

    #[test]
    fn test_lowercase_preserved() {
        assert_eq!(names("Move"), vec![name("Move")]);
    }

    #[test]
    fn test_name_stops_at_punctuation() {
        assert_eq!(
            names("PROGRAM-ID."),
            vec![name("PROGRAM-ID"), Token::new(".", TokenType::Punctuation)]
        );
    }
}
