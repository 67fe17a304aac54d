//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains the scan
//! position over a read-only source buffer. The position is a byte offset
//! that only ever moves forward; line and column numbers are tracked
//! alongside it for error reporting.

use crate::chars::is_whitespace;

/// A forward-only cursor over source text.
///
/// # Example
///
/// ```
/// use cobol_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("MOVE A");
///
/// assert_eq!(cursor.current_char(), Some('M'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('O'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;

        // Fast path for ASCII
        if b < 128 {
            return Some(b as char);
        }

        self.source[self.position..].chars().next()
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use cobol_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(">=");
    /// assert_eq!(cursor.peek_char(0), Some('>'));
    /// assert_eq!(cursor.peek_char(1), Some('='));
    /// assert_eq!(cursor.peek_char(2), None);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            return self.current_char();
        }
        self.remaining().chars().nth(offset)
    }

    /// Advances past the current character, returning it.
    ///
    /// Updates line and column tracking. Returns `None` and does nothing if
    /// already at end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use cobol_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0042 PIC");
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.remaining(), " PIC");
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use cobol_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('<'));
    /// assert!(cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips spaces, tabs, carriage returns and line feeds.
    ///
    /// Does not skip comments.
    pub fn skip_whitespace(&mut self) {
        self.advance_while(is_whitespace);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between byte offset `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source from the cursor to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
