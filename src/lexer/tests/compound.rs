//! Tests for compound token sequences (declarations, calls, statements).

use super::*;

#[test]
fn test_function_call() {
    let kinds = tokenize_kinds(r#"print("hello")"#);
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("print".to_string()),
            TokenKind::LeftParen,
            TokenKind::StringLiteral("hello".to_string()),
            TokenKind::RightParen,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_nested_call() {
    let kinds = tokenize_kinds("outer(inner(1))");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("outer".to_string()),
            TokenKind::LeftParen,
            TokenKind::Identifier("inner".to_string()),
            TokenKind::LeftParen,
            TokenKind::Integer("1".to_string()),
            TokenKind::RightParen,
            TokenKind::RightParen,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_multiple_args() {
    let kinds = tokenize_kinds("func(a, b, c)");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("func".to_string()),
            TokenKind::LeftParen,
            TokenKind::Identifier("a".to_string()),
            TokenKind::Comma,
            TokenKind::Identifier("b".to_string()),
            TokenKind::Comma,
            TokenKind::Identifier("c".to_string()),
            TokenKind::RightParen,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_variable_declaration() {
    let kinds = tokenize_kinds("int x = 5;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier("x".to_string()),
            TokenKind::Equal,
            TokenKind::Integer("5".to_string()),
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_function_signature() {
    let kinds = tokenize_kinds("int add(int a, int b) {");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Int,
            TokenKind::Identifier("add".to_string()),
            TokenKind::LeftParen,
            TokenKind::Int,
            TokenKind::Identifier("a".to_string()),
            TokenKind::Comma,
            TokenKind::Int,
            TokenKind::Identifier("b".to_string()),
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_while_condition() {
    let kinds = tokenize_kinds("while (x <= 10) {");
    assert_eq!(
        kinds,
        vec![
            TokenKind::While,
            TokenKind::LeftParen,
            TokenKind::Identifier("x".to_string()),
            TokenKind::LessEqual,
            TokenKind::Integer("10".to_string()),
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Eof
        ]
    );
}
