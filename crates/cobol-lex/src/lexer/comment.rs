//! Comment lexing.
//!
//! This module handles skipping whitespace and line comments ahead of a
//! token.

use crate::chars::is_line_break;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// A comment indicator found where a token would start opens a line
    /// comment. Runs of comment lines and blank lines are skipped in turn
    /// until a token start or end of input is reached.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        self.check_bom();

        loop {
            self.cursor.skip_whitespace();

            match self.cursor.current_char() {
                Some(c) if c == self.config.comment_indicator => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment, including its CR, LF or CRLF terminator.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance_while(|c| !is_line_break(c));

        self.cursor.match_char('\r');
        self.cursor.match_char('\n');
    }
}
