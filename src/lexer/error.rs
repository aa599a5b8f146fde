//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents the one class of
//! lexer failure that aborts tokenization outright: an unterminated block
//! comment. Every other malformed construct (bad character, unterminated
//! string) is reported as an in-band [`crate::token::TokenKind::Error`]
//! token instead, so the parser can recover and keep going.

use crate::token::Span;

/// An error that aborts tokenization.
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    /// An unterminated `/* ... */` comment that ran off the end of input.
    pub(super) fn unterminated_block_comment(span: Span) -> Self {
        LexError {
            message: "Unterminated block comment".to_string(),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
