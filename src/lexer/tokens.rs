//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the various token kinds from
//! the input: punctuation and operators (with two-character lookahead),
//! string and integer literals, and identifiers/keywords.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer past it.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// Assumes that whitespace and comments have already been skipped by
    /// [`skip_whitespace_and_comments`](super::Lexer::skip_whitespace_and_comments).
    /// Unlike that method, this one never fails: malformed input (an
    /// unexpected character, an unterminated string) is surfaced as a
    /// [`TokenKind::Error`] token rather than aborting the scan, so a
    /// single bad character does not prevent the rest of the file from
    /// being tokenized.
    pub(super) fn next_token(&mut self) -> Token {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        let c = match self.current_char() {
            Some(c) => c,
            None => {
                return Token::new(
                    TokenKind::Eof,
                    Span::new(start_pos, start_pos, start_line, start_column),
                );
            }
        };

        if let Some(token) = self.read_punctuation_or_operator(c, start_pos, start_line, start_column) {
            return token;
        }

        match c {
            '"' => self.read_string(start_pos, start_line, start_column),
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                self.read_identifier_or_keyword(start_pos, start_line, start_column)
            }
            _ => {
                self.advance();
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                Token::new(TokenKind::Error(format!("Unexpected character: '{c}'")), span)
            }
        }
    }

    fn read_punctuation_or_operator(
        &mut self,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Option<Token> {
        let token = match c {
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column),
            '*' => self.single_char_token(TokenKind::Star, start_pos, start_line, start_column),
            '/' => self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column),
            '%' => self.single_char_token(TokenKind::Percent, start_pos, start_line, start_column),
            ';' => self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column),
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            '(' => self.single_char_token(TokenKind::LeftParen, start_pos, start_line, start_column),
            ')' => self.single_char_token(TokenKind::RightParen, start_pos, start_line, start_column),
            '{' => self.single_char_token(TokenKind::LeftBrace, start_pos, start_line, start_column),
            '}' => self.single_char_token(TokenKind::RightBrace, start_pos, start_line, start_column),
            '=' => self.read_two_char(
                '=',
                TokenKind::EqualEqual,
                TokenKind::Equal,
                start_pos,
                start_line,
                start_column,
            ),
            '!' => self.read_two_char(
                '=',
                TokenKind::BangEqual,
                TokenKind::Bang,
                start_pos,
                start_line,
                start_column,
            ),
            '<' => self.read_two_char(
                '=',
                TokenKind::LessEqual,
                TokenKind::Less,
                start_pos,
                start_line,
                start_column,
            ),
            '>' => self.read_two_char(
                '=',
                TokenKind::GreaterEqual,
                TokenKind::Greater,
                start_pos,
                start_line,
                start_column,
            ),
            '&' => {
                self.advance();
                if self.current_char() == Some('&') {
                    self.advance();
                    Token::new(
                        TokenKind::AmpAmp,
                        Span::new(start_pos, self.pos, start_line, start_column),
                    )
                } else {
                    Token::new(
                        TokenKind::Error("Unexpected character".to_string()),
                        Span::new(start_pos, self.pos, start_line, start_column),
                    )
                }
            }
            '|' => {
                self.advance();
                if self.current_char() == Some('|') {
                    self.advance();
                    Token::new(
                        TokenKind::PipePipe,
                        Span::new(start_pos, self.pos, start_line, start_column),
                    )
                } else {
                    Token::new(
                        TokenKind::Error("Unexpected character".to_string()),
                        Span::new(start_pos, self.pos, start_line, start_column),
                    )
                }
            }
            _ => return None,
        };

        Some(token)
    }

    /// Reads a one- or two-character token: if the character following `c`
    /// is `second`, consumes both and produces `combined`; otherwise
    /// consumes just `c` and produces `single`.
    fn read_two_char(
        &mut self,
        second: char,
        combined: TokenKind,
        single: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        if self.current_char() == Some(second) {
            self.advance();
            Token::new(combined, Span::new(start_pos, self.pos, start_line, start_column))
        } else {
            Token::new(single, Span::new(start_pos, self.pos, start_line, start_column))
        }
    }

    /// Reads a string literal's raw inner text.
    ///
    /// Escape sequences are *not* decoded: the lexeme stored in
    /// [`TokenKind::StringLiteral`] is the verbatim source text between the
    /// quotes, backslashes and all. A backslash only has the effect of
    /// protecting the following character from ending the literal (so
    /// `\"` does not close the string); semantic/codegen layers never see
    /// decoded escapes.
    ///
    /// # Errors
    ///
    /// Produces a `TokenKind::Error("Unterminated string")` token if the
    /// closing quote is never found before end of input.
    fn read_string(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        self.advance(); // consume opening quote
        let content_start = self.pos;

        loop {
            match self.current_char() {
                Some('"') => {
                    let lexeme = self.input[content_start..self.pos].to_string();
                    self.advance(); // consume closing quote
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Token::new(TokenKind::StringLiteral(lexeme), span);
                }
                Some('\\') => {
                    self.advance(); // consume backslash
                    if self.current_char().is_some() {
                        self.advance(); // consume escaped character, raw
                    }
                }
                Some(_) => self.advance(),
                None => {
                    let span = Span::new(start_pos, self.pos, start_line, start_column);
                    return Token::new(TokenKind::Error("Unterminated string".to_string()), span);
                }
            }
        }
    }

    /// Reads an integer literal: one or more ASCII digits.
    ///
    /// # Errors
    ///
    /// Produces a `TokenKind::Error` token if the digit sequence does not
    /// fit in an `i64` (used by the code generator as an immediate).
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        if text.parse::<i64>().is_err() {
            return Token::new(
                TokenKind::Error(format!("Integer literal out of range: '{text}'")),
                span,
            );
        }

        Token::new(TokenKind::Integer(text.to_string()), span)
    }

    /// Reads an identifier, resolving it to a keyword token if it matches
    /// the closed keyword set.
    fn read_identifier_or_keyword(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        let kind = TokenKind::keyword_from_str(text)
            .unwrap_or_else(|| TokenKind::Identifier(text.to_string()));

        Token::new(kind, span)
    }
}
