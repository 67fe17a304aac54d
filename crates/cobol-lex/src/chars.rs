//! Character classification for the COBOL-dialect lexer.
//!
//! Classification is ASCII-only: names are built from ASCII letters, ASCII
//! digits and the hyphen. Anything outside these classes that is not
//! whitespace, a quote, punctuation or an operator is an unexpected
//! character.

/// Punctuation characters, each forming a single-character token.
pub const PUNCTUATION: [char; 4] = ['.', ',', '(', ')'];

/// Characters that may start an operator token.
pub const OPERATOR_START: [char; 3] = ['<', '>', '='];

/// The string delimiter.
pub const QUOTE: char = '"';

/// Escape introducer inside string literals.
pub const ESCAPE: char = '\\';

/// Checks if a character can start a name.
///
/// # Example
///
/// ```
/// use cobol_lex::chars::is_name_start;
///
/// assert!(is_name_start('W'));
/// assert!(is_name_start('w'));
/// assert!(!is_name_start('-'));
/// assert!(!is_name_start('1'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue a name.
///
/// # Example
///
/// ```
/// use cobol_lex::chars::is_name_continue;
///
/// assert!(is_name_continue('A'));
/// assert!(is_name_continue('0'));
/// assert!(is_name_continue('-'));
/// assert!(!is_name_continue('_'));
/// assert!(!is_name_continue('.'));
/// ```
#[inline]
pub fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Checks if a character is whitespace: space, tab, CR or LF.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Checks if a character ends a line.
#[inline]
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

/// Checks if a character is a punctuation token on its own.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Checks if a character starts an operator.
#[inline]
pub fn is_operator_start(c: char) -> bool {
    OPERATOR_START.contains(&c)
}

/// Checks if a character already has a meaning in the token grammar.
///
/// Used to reject comment indicators that would shadow a token.
pub fn is_reserved(c: char) -> bool {
    is_whitespace(c)
        || is_name_continue(c)
        || is_punctuation(c)
        || is_operator_start(c)
        || c == QUOTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_classes_are_ascii_only() {
        assert!(!is_name_start('é'));
        assert!(!is_name_continue('é'));
        assert!(!is_name_continue('٣'));
    }

    #[test]
    fn test_whitespace_set() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('\u{00A0}'));
        assert!(!is_whitespace('\u{000B}'));
    }

    #[test]
    fn test_reserved() {
        assert!(is_reserved('A'));
        assert!(is_reserved('-'));
        assert!(is_reserved('.'));
        assert!(is_reserved('<'));
        assert!(is_reserved('"'));
        assert!(!is_reserved('*'));
        assert!(!is_reserved('#'));
    }
}
