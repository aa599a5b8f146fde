//! Lexical analyzer for TinyC.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input byte by byte (UTF-8 aware)
//! - Recognizes keywords, identifiers, integer and string literals,
//!   operators and punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace and `//` / `/* */` comments
//!
//! # Supported Tokens
//!
//! - **Keywords**: `int char void if else while for return`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Integer literals**: sequences of ASCII digits, stored as `i64`
//! - **String literals**: enclosed in double quotes; escape sequences are
//!   captured raw (not decoded) — see [`tokens`]
//! - **Operators**: `+ - * / % = == != < <= > >= && || !`
//! - **Punctuation**: `; , ( ) { }`
//!
//! Most malformed input does not abort the scan: an unexpected character or
//! an unterminated string becomes a [`TokenKind::Error`] token in the
//! stream, which the parser reports and recovers from. The sole exception
//! is an unterminated `/* ... */` comment, which aborts tokenization with a
//! [`LexError`] — there is no sensible token to resume scanning from inside
//! an unclosed comment.
//!
//! # Module Structure
//!
//! - [`error`] - The `LexError` that aborts a scan
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace and comment handling
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes TinyC source code.
///
/// The `Lexer` maintains its position within the input and tracks line and
/// column numbers for error reporting. It is designed to be used once per
/// source file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// The returned vector always ends with an [`TokenKind::Eof`] token on
    /// success. Most malformed constructs do not stop the scan — they
    /// surface as a [`TokenKind::Error`] token in the stream instead, so
    /// the parser can report them and keep going. Only an unterminated
    /// block comment aborts the scan outright, since there is no sound
    /// place to resume from.
    ///
    /// # Errors
    ///
    /// Returns [`LexError`] if a `/* ... */` comment is never closed.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            tokens.push(self.next_token());
        }

        Ok(tokens)
    }
}
