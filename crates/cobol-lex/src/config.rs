//! Lexer configuration.
//!
//! [`LexerConfig`] holds the few knobs the scanner exposes. Every field has
//! a default matching the standard dialect, so `LexerConfig::default()` is
//! what [`Lexer::new`](crate::Lexer::new) uses.

use crate::chars::is_reserved;
use crate::error::ConfigError;

/// Default line comment indicator.
pub const DEFAULT_COMMENT_INDICATOR: char = '*';

/// Scanner settings.
///
/// # Example
///
/// ```
/// use cobol_lex::LexerConfig;
///
/// let config = LexerConfig::default().with_comment_indicator('#');
/// assert!(config.validate().is_ok());
///
/// let bad = LexerConfig::default().with_comment_indicator('.');
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Character that starts a line comment at a token position.
    pub comment_indicator: char,

    /// Skip a UTF-8 byte order mark at the start of the source.
    pub skip_bom: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            comment_indicator: DEFAULT_COMMENT_INDICATOR,
            skip_bom: true,
        }
    }
}

impl LexerConfig {
    /// Sets the line comment indicator.
    pub fn with_comment_indicator(mut self, indicator: char) -> Self {
        self.comment_indicator = indicator;
        self
    }

    /// Sets whether a leading byte order mark is skipped.
    pub fn with_skip_bom(mut self, skip_bom: bool) -> Self {
        self.skip_bom = skip_bom;
        self
    }

    /// Checks that the settings can be used by the scanner.
    ///
    /// The comment indicator must not be whitespace or a character that
    /// already starts or continues a token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_reserved(self.comment_indicator) || self.comment_indicator == '\u{FEFF}' {
            return Err(ConfigError::InvalidCommentIndicator(self.comment_indicator));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert_eq!(config.comment_indicator, '*');
        assert!(config.skip_bom);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_token_characters() {
        for c in ['A', '7', '-', '"', '(', '=', ' ', '\n'] {
            let config = LexerConfig::default().with_comment_indicator(c);
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidCommentIndicator(c))
            );
        }
    }

    #[test]
    fn test_accepts_free_characters() {
        for c in ['*', '#', '/', '!'] {
            assert!(LexerConfig::default()
                .with_comment_indicator(c)
                .validate()
                .is_ok());
        }
    }
}
