//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Tokenizes input and returns only the kinds, panicking on a `LexError`
/// (an unterminated block comment — everything else is an in-band
/// `TokenKind::Error`, not a hard failure).
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Tokenization failed for input {:?}: {}", input, e))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Tokenizes input and returns the `LexError`, panicking if tokenization
/// succeeded instead of aborting.
pub(super) fn tokenize_error(input: &str) -> LexError {
    let mut lexer = Lexer::new(input);
    match lexer.tokenize() {
        Ok(tokens) => panic!(
            "Expected tokenization to fail for input {:?}, but it succeeded with {} tokens",
            input,
            tokens.len()
        ),
        Err(e) => e,
    }
}

mod comments;
mod compound;
mod identifiers;
mod integers;
mod spans;
mod strings;
