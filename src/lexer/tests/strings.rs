//! Tests for string literals.
//!
//! Escape sequences are captured raw, not decoded: the stored lexeme is the
//! verbatim source text between the quotes.

use super::*;

#[test]
fn test_string_empty() {
    let kinds = tokenize_kinds(r#""""#);
    assert_eq!(
        kinds,
        vec![TokenKind::StringLiteral("".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_string_simple() {
    let kinds = tokenize_kinds(r#""hello""#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::StringLiteral("hello".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_string_with_spaces() {
    let kinds = tokenize_kinds(r#""hello world""#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::StringLiteral("hello world".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_string_escape_newline_stays_raw() {
    // Source `"a\nb"` lexes to the four raw characters a \ n b, not a real newline.
    let kinds = tokenize_kinds(r#""a\nb""#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::StringLiteral("a\\nb".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_string_escaped_quote_does_not_terminate() {
    let kinds = tokenize_kinds(r#""a\"b""#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::StringLiteral("a\\\"b".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_string_unterminated_at_eof() {
    let kinds = tokenize_kinds(r#""abc"#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::Error("Unterminated string".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_string_as_call_argument() {
    let kinds = tokenize_kinds(r#"print("hi")"#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("print".to_string()),
            TokenKind::LeftParen,
            TokenKind::StringLiteral("hi".to_string()),
            TokenKind::RightParen,
            TokenKind::Eof
        ]
    );
}
