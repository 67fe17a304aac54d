//! Phrase scanning.
//!
//! A phrase is raw text up to a statement-terminating period. Names in the
//! dialect may contain periods themselves (`A.J.LOPEZ`), so a period only
//! terminates the phrase when whitespace or end of input follows it.

use tracing::trace;

use crate::chars::is_whitespace;
use crate::Lexer;

/// The statement terminator.
const TERMINATOR: char = '.';

impl<'a> Lexer<'a> {
    /// Returns the next phrase, without its terminating period.
    ///
    /// Leading whitespace is skipped and trailing whitespace before the
    /// terminator is trimmed. The token grammar is not applied: quotes,
    /// comment indicators and unexpected characters are all plain content.
    /// If end of input comes before a terminator, the text read so far is
    /// returned. Returns `None` once no phrase content remains.
    ///
    /// # Example
    ///
    /// ```
    /// use cobol_lex::Lexer;
    ///
    /// let mut lexer = Lexer::new("AUTHOR. A.J.LOPEZ.\r\n");
    /// assert_eq!(lexer.next_phrase().as_deref(), Some("AUTHOR"));
    /// assert_eq!(lexer.next_phrase().as_deref(), Some("A.J.LOPEZ"));
    /// assert_eq!(lexer.next_phrase(), None);
    /// ```
    pub fn next_phrase(&mut self) -> Option<String> {
        self.check_bom();
        self.cursor.skip_whitespace();

        if self.cursor.is_at_end() {
            self.set_last_span(None);
            return None;
        }

        self.start_token();
        let start = self.cursor.position();
        let mut end = start;

        while let Some(c) = self.cursor.current_char() {
            if c == TERMINATOR && self.at_terminator() {
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
            end = self.cursor.position();
        }

        let phrase = self.cursor.source()[start..end].trim_end_matches(is_whitespace);
        let span = self.span_to(start + phrase.len());
        self.set_last_span(Some(span));
        trace!(
            phrase,
            line = span.line,
            column = span.column,
            "scanned phrase"
        );
        Some(phrase.to_string())
    }

    /// Whether the period under the cursor ends the phrase.
    fn at_terminator(&self) -> bool {
        self.cursor.peek_char(1).map_or(true, is_whitespace)
    }
}
