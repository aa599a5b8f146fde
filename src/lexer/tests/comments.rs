//! Tests for line and block comment handling.

use super::*;

#[test]
fn test_line_comment_at_eof() {
    let kinds = tokenize_kinds("// comment");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_line_comment_before_newline() {
    let kinds = tokenize_kinds("// comment\nint");
    assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn test_line_comment_does_not_eat_newline() {
    let kinds = tokenize_kinds("x // comment\ny");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("x".to_string()),
            TokenKind::Identifier("y".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_block_comment_single_line() {
    let kinds = tokenize_kinds("/* comment */int");
    assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn test_block_comment_multiline() {
    let kinds = tokenize_kinds("/* line one\nline two */int x");
    assert_eq!(
        kinds,
        vec![TokenKind::Int, TokenKind::Identifier("x".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_block_comment_containing_stars() {
    let kinds = tokenize_kinds("/** a * b **/int");
    assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn test_multiple_comments() {
    let kinds = tokenize_kinds("// first\n/* second */\nint");
    assert_eq!(kinds, vec![TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn test_unterminated_block_comment_errors() {
    let err = tokenize_error("int x; /* never closed");
    assert!(err.message.contains("Unterminated block comment"));
}

#[test]
fn test_unterminated_block_comment_reports_start_position() {
    let err = tokenize_error("/* unterminated");
    assert_eq!(err.span.line, 1);
    assert_eq!(err.span.column, 1);
}
