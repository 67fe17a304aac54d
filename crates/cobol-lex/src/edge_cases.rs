//! Edge case tests for cobol-lex

#[cfg(test)]
mod tests {
    use crate::{LexErrorKind, Lexer, Token, TokenType};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize().unwrap()
    }

    fn error_kind(source: &str) -> LexErrorKind {
        Lexer::new(source).tokenize().unwrap_err().kind()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_letter_name() {
        assert_eq!(lex_all("X"), vec![Token::new("X", TokenType::Name)]);
    }

    #[test]
    fn test_edge_long_name() {
        let name = format!("A{}", "-B9".repeat(5000));
        assert_eq!(lex_all(&name), vec![Token::new(name.clone(), TokenType::Name)]);
    }

    #[test]
    fn test_edge_leading_hyphen_is_unexpected() {
        assert_eq!(error_kind("-ITEM"), LexErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn test_edge_underscore_is_unexpected() {
        let err = Lexer::new("WS_ITEM").tokenize().unwrap_err();
        assert_eq!(err.to_string(), "unexpected '_'");
    }

    #[test]
    fn test_edge_non_ascii_letter_is_unexpected() {
        let err = Lexer::new("ÑAME").tokenize().unwrap_err();
        assert_eq!(err.to_string(), "unexpected 'Ñ'");
    }

    #[test]
    fn test_edge_non_ascii_inside_string() {
        assert_eq!(
            lex_all("\"AÑO\""),
            vec![Token::new("AÑO", TokenType::String)]
        );
    }

    #[test]
    fn test_edge_nul_character_is_unexpected() {
        let err = Lexer::new("\0").tokenize().unwrap_err();
        assert_eq!(err.to_string(), "unexpected '\0'");
    }

    #[test]
    fn test_edge_single_quote_is_unexpected() {
        assert_eq!(error_kind("'ADAM'"), LexErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn test_edge_star_inside_line_is_comment() {
        assert_eq!(
            lex_all("COMPUTE X = A * B"),
            vec![
                Token::new("COMPUTE", TokenType::Name),
                Token::new("X", TokenType::Name),
                Token::new("=", TokenType::Operator),
                Token::new("A", TokenType::Name),
            ]
        );
    }

    #[test]
    fn test_edge_adjacent_strings() {
        assert_eq!(
            lex_all("\"A\"\"B\""),
            vec![
                Token::new("A", TokenType::String),
                Token::new("B", TokenType::String),
            ]
        );
    }

    #[test]
    fn test_edge_cr_only_line_endings() {
        assert_eq!(
            lex_all("*comment\rDIVISION\rSECTION"),
            vec![
                Token::new("DIVISION", TokenType::Name),
                Token::new("SECTION", TokenType::Name),
            ]
        );
    }

    #[test]
    fn test_edge_exhausted_stays_exhausted() {
        let mut lexer = Lexer::new("A");
        assert!(lexer.next_token().unwrap().is_some());
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Ok(None));
            assert_eq!(lexer.next_phrase(), None);
        }
    }

    #[test]
    fn test_edge_position_never_decreases() {
        let mut lexer = Lexer::new("  A.B  . \"S\" <= 12 * c\nX. Y");
        let mut last = lexer.position();
        loop {
            let token = lexer.next_token().unwrap();
            assert!(lexer.position() >= last);
            last = lexer.position();
            if token.is_none() {
                break;
            }
        }
        assert!(lexer.is_exhausted());
    }

    #[test]
    fn test_edge_phrase_then_tokens_share_cursor() {
        let mut lexer = Lexer::new("REMARKS. ANYTHING GOES! HERE.\nMOVE 1 TO X.");
        assert_eq!(lexer.next_phrase().as_deref(), Some("REMARKS"));
        assert_eq!(lexer.next_phrase().as_deref(), Some("ANYTHING GOES! HERE"));
        let tokens: Vec<Token> = lexer.map(Result::unwrap).collect();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], Token::new("MOVE", TokenType::Name));
    }
}
