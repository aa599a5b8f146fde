//! Whitespace and comment skipping for the lexer.
//!
//! This module provides methods for skipping over whitespace characters
//! and comments (both `//` line comments and `/* */` block comments)
//! during tokenization.

use super::Lexer;
use super::error::LexError;
use crate::token::Span;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments in a loop.
    ///
    /// This method handles the case where a comment might be followed by
    /// whitespace, which might be followed by another comment, etc.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if a `/* ... */` comment is never closed.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            self.skip_whitespace();
            if !self.skip_line_comment() && !self.skip_block_comment()? {
                break;
            }
        }
        Ok(())
    }

    /// Skips consecutive whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_whitespace()) {
            self.advance();
        }
    }

    /// Skips a `//` line comment if one is present at the current position.
    ///
    /// Line comments extend to (but not past) the end of the line; the
    /// newline itself is left for the next call to [`skip_whitespace`] to
    /// consume, matching the original scanner's behavior.
    ///
    /// [`skip_whitespace`]: Self::skip_whitespace
    fn skip_line_comment(&mut self) -> bool {
        if self.current_char() == Some('/') && self.peek_char() == Some('/') {
            while self.current_char().is_some_and(|c| c != '\n') {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    /// Skips a `/* ... */` block comment if one is present at the current
    /// position.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the comment runs off the end of input
    /// without a closing `*/`.
    fn skip_block_comment(&mut self) -> Result<bool, LexError> {
        if self.current_char() != Some('/') || self.peek_char() != Some('*') {
            return Ok(false);
        }

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        self.advance(); // consume '/'
        self.advance(); // consume '*'

        loop {
            if self.current_char() == Some('*') && self.peek_char() == Some('/') {
                self.advance(); // consume '*'
                self.advance(); // consume '/'
                return Ok(true);
            }
            if self.is_eof() {
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                return Err(LexError::unterminated_block_comment(span));
            }
            self.advance();
        }
    }
}
