//! Tests for integer literal recognition.

use super::*;

#[test]
fn test_integer_literal_simple() {
    let kinds = tokenize_kinds("123");
    assert_eq!(kinds, vec![TokenKind::Integer("123".to_string()), TokenKind::Eof]);
}

#[test]
fn test_integer_literal_zero() {
    let kinds = tokenize_kinds("0");
    assert_eq!(kinds, vec![TokenKind::Integer("0".to_string()), TokenKind::Eof]);
}

#[test]
fn test_integer_literal_max_i64() {
    let kinds = tokenize_kinds("9223372036854775807");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer("9223372036854775807".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_integer_literal_overflow() {
    let kinds = tokenize_kinds("99999999999999999999");
    assert!(matches!(kinds[0], TokenKind::Error(_)));
}

#[test]
fn test_declaration_with_integer() {
    let kinds = tokenize_kinds("int x = 42;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier("x".to_string()),
            TokenKind::Equal,
            TokenKind::Integer("42".to_string()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}
