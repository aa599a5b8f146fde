//! Tests for token navigation and parser construction edge cases.

use super::*;
use crate::token::{Span, Token, TokenKind};

#[test]
#[should_panic(expected = "token list must not be empty")]
fn test_new_panics_on_empty_tokens() {
    Parser::new(vec![]);
}

#[test]
fn test_advance_does_not_step_past_eof() {
    let tokens = vec![Token::new(TokenKind::Eof, Span::dummy())];
    let mut parser = Parser::new(tokens);
    assert!(parser.is_eof());
    parser.advance();
    parser.advance();
    assert!(parser.is_eof());
}

#[test]
fn test_empty_program_parses_to_no_declarations() {
    let program = parse_ok("");
    assert!(program.declarations.is_empty());
}

#[test]
fn test_whitespace_only_program_parses_to_no_declarations() {
    let program = parse_ok("   \n\t  // a comment\n");
    assert!(program.declarations.is_empty());
}

#[test]
fn test_block_comments_are_skipped_between_declarations() {
    let program = parse_ok("/* comment */ int main() { return 0; }");
    assert_eq!(program.declarations.len(), 1);
}
