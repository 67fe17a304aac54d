//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the token dispatch and the
//! iterator adapter.

use tracing::{debug, trace};

use crate::chars::{is_name_start, is_operator_start, is_punctuation, QUOTE};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{ConfigError, LexError, Result};
use crate::span::Span;
use crate::token::Token;

/// Lexer for the COBOL source dialect.
///
/// The lexer borrows the source text and scans it with a single forward-only
/// cursor. Two entry points share that cursor: [`next_token`] applies the
/// token grammar and [`next_phrase`] reads raw text up to a terminating
/// period. A lexer is not reset; create a new one for each source.
///
/// [`next_token`]: Lexer::next_token
/// [`next_phrase`]: Lexer::next_phrase
///
/// # Example
///
/// ```
/// use cobol_lex::{Lexer, TokenType};
///
/// let mut lexer = Lexer::new("IDENTIFICATION DIVISION.");
///
/// let token = lexer.next_token().unwrap().unwrap();
/// assert_eq!(token.value(), "IDENTIFICATION");
/// assert_eq!(token.token_type(), TokenType::Name);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Scanner settings.
    pub(super) config: LexerConfig,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Span of the last token or phrase produced.
    last_span: Option<Span>,

    /// Whether the BOM (Byte Order Mark) has been checked.
    bom_checked: bool,

    /// Set once the iterator adapter has yielded an error.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    ///
    /// An empty source produces a lexer that is already exhausted.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            config: LexerConfig::default(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            last_span: None,
            bom_checked: false,
            failed: false,
        }
    }

    /// Creates a lexer with custom settings.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is rejected.
    pub fn with_config(
        source: &'a str,
        config: LexerConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let mut lexer = Self::new(source);
        lexer.config = config;
        Ok(lexer)
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace and line comments are skipped first. Returns `Ok(None)`
    /// once the input is exhausted, and keeps returning it on later calls.
    ///
    /// # Errors
    ///
    /// - [`LexError::UnclosedString`] if a string literal runs to end of input.
    /// - [`LexError::UnexpectedCharacter`] if the next character starts no
    ///   token. The cursor is left just past the offending character; callers
    ///   should stop scanning.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace_and_comments();
        self.start_token();

        let Some(c) = self.cursor.current_char() else {
            self.set_last_span(None);
            return Ok(None);
        };

        let token = match c {
            c if is_name_start(c) => self.lex_name(),
            c if c.is_ascii_digit() => self.lex_integer(),
            QUOTE => self.lex_string()?,
            c if is_punctuation(c) => self.lex_punctuation(),
            c if is_operator_start(c) => self.lex_operator(),
            c => {
                self.cursor.advance();
                return Err(self.report(LexError::UnexpectedCharacter {
                    ch: c,
                    span: self.current_span(),
                }));
            }
        };

        let span = self.current_span();
        self.set_last_span(Some(span));
        trace!(
            token_type = %token.token_type(),
            value = token.value(),
            line = span.line,
            column = span.column,
            "scanned token"
        );
        Ok(Some(token))
    }

    /// Collects every remaining token.
    ///
    /// # Errors
    ///
    /// Returns the first scanning error encountered.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        self.collect()
    }

    /// Marks the cursor position as the start of the next token or phrase.
    pub(super) fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the recorded token start to the cursor.
    pub(super) fn current_span(&self) -> Span {
        self.span_to(self.cursor.position())
    }

    /// Span from the recorded token start to byte offset `end`.
    pub(super) fn span_to(&self, end: usize) -> Span {
        Span::new(
            self.token_start,
            end,
            self.token_start_line,
            self.token_start_column,
        )
    }

    pub(super) fn set_last_span(&mut self, span: Option<Span>) {
        self.last_span = span;
    }

    /// Logs a scanning error and hands it back for returning.
    pub(super) fn report(&self, error: LexError) -> LexError {
        let span = error.span();
        debug!(
            error = %error,
            line = span.line,
            column = span.column,
            "lexical error"
        );
        error
    }

    /// Skips a byte order mark at the very start of the source, once.
    pub(super) fn check_bom(&mut self) {
        if self.bom_checked {
            return;
        }
        self.bom_checked = true;
        if self.config.skip_bom && self.cursor.position() == 0 {
            self.cursor.match_char('\u{FEFF}');
        }
    }

    /// Span of the token or phrase most recently produced.
    ///
    /// `None` before the first scan and after a scan reported end of input.
    pub fn token_span(&self) -> Option<Span> {
        self.last_span
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once the cursor has reached the end of the source.
    ///
    /// Trailing whitespace or comments may remain even when this is false
    /// and the next scan returns `None`.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Returns the settings in use.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

impl Default for Lexer<'_> {
    fn default() -> Self {
        Lexer::new("")
    }
}

impl<'a> From<&'a str> for Lexer<'a> {
    fn from(source: &'a str) -> Self {
        Lexer::new(source)
    }
}

impl<'a> From<Option<&'a str>> for Lexer<'a> {
    /// An absent source gives an exhausted lexer.
    fn from(source: Option<&'a str>) -> Self {
        Lexer::new(source.unwrap_or_default())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    /// Yields tokens until end of input. After the first error, yields
    /// that error once and then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
