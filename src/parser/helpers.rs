//! Parser helper methods for token navigation, error recording and recovery.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

/// After this many accumulated errors the parser gives up rather than keep
/// synchronizing through a file that is mostly garbage.
pub(super) const MAX_PARSE_ERRORS: usize = 50;

impl Parser {
    /// Returns a user-friendly display string for a token kind, used in
    /// parse error messages.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        kind.describe()
    }

    /// Returns a reference to the current token.
    ///
    /// Safe to call at any time: `new()` ensures `tokens` is non-empty and
    /// `advance()` never steps past `Eof`, so `pos` is always a valid index.
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns the most recently consumed token.
    pub(super) fn previous(&self) -> &Token {
        &self.previous
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token. `previous` becomes a copy of the token
    /// just consumed; does nothing but still refresh `previous` if already
    /// at `Eof`.
    pub(super) fn advance(&mut self) {
        self.previous = self.current().clone();
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the current token to match `expected` and advances past it.
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.current_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::expected(
                &Self::token_kind_display(expected),
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::expected(
                "identifier",
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Records a parse error, respecting panic mode: the first error after
    /// a successful synchronization is recorded, further errors are
    /// swallowed until `synchronize` clears the flag. Stops the parser
    /// entirely once `MAX_PARSE_ERRORS` is reached.
    pub(super) fn record_error(&mut self, err: ParseError) {
        if self.panic_mode || self.giving_up {
            return;
        }
        self.panic_mode = true;
        self.errors.push(err);
        if self.errors.len() >= MAX_PARSE_ERRORS {
            self.errors.push(ParseError::too_many_errors(self.current_span()));
            self.giving_up = true;
        }
    }

    /// Advances until a synchronization point: just past a semicolon, at
    /// the start of a new statement/declaration keyword, or at end of
    /// input. Clears panic mode so the next error is recorded.
    pub(super) fn synchronize(&mut self) {
        self.panic_mode = false;
        while !self.is_eof() {
            if matches!(self.previous().kind, TokenKind::Semicolon) {
                return;
            }
            if matches!(
                self.current_kind(),
                TokenKind::If
                    | TokenKind::For
                    | TokenKind::While
                    | TokenKind::Return
                    | TokenKind::Int
                    | TokenKind::Char
                    | TokenKind::Void
            ) {
                return;
            }
            self.advance();
        }
    }
}
