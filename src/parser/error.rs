//! Parse error types.

use crate::token::Span;

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message and the source location
/// where the error occurred. The parser never stops at the first one — it
/// accumulates a `Vec<ParseError>` over the whole input (see
/// [`super::Parser::parse`]).
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug, Clone)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl ParseError {
    pub(super) fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    pub(super) fn expected(expected: &str, found: &str, span: Span) -> Self {
        ParseError::new(format!("Expected {expected}, found {found}"), span)
    }

    /// Call syntax is restricted to bare identifiers: `(...)` after anything
    /// else is this error.
    pub(super) fn can_only_call_identifiers(span: Span) -> Self {
        ParseError::new("Can only call identifiers", span)
    }

    pub(super) fn nested_function_not_supported(span: Span) -> Self {
        ParseError::new("Nested function declarations are not supported", span)
    }

    pub(super) fn too_many_errors(span: Span) -> Self {
        ParseError::new("Too many parse errors, giving up", span)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
