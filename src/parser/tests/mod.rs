//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`decl`]: Top-level function and variable declarations
//! - [`stmt`]: Statement parsing (`if`/`while`/`for`/`return`/locals)
//! - [`expr`]: Expression parsing and precedence
//! - [`errors`]: Error detection, messages, and recovery
//! - [`helpers`]: Token navigation edge cases

use super::*;
use crate::ast::{BinaryOperator, Declaration, Expr, ExprKind, StmtKind, UnaryOperator};
use crate::lexer::Lexer;

mod helpers;

/// Lexes and parses `input`, panicking if the lexer itself fails (lexer
/// failures are the lexer's test suite's job, not the parser's).
pub(super) fn parse(input: &str) -> (Program, Vec<ParseError>) {
    let mut lexer = Lexer::new(input);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on parser test input {:?}: {}", input, e));
    Parser::new(tokens).parse()
}

/// Parses `input` expecting zero errors, and returns the resulting program.
pub(super) fn parse_ok(input: &str) -> Program {
    let (program, errors) = parse(input);
    assert!(
        errors.is_empty(),
        "expected no parse errors for {:?}, got {:?}",
        input,
        errors
    );
    program
}

/// Parses `input` expecting at least one error, and returns the first one.
pub(super) fn parse_error(input: &str) -> ParseError {
    let (_, errors) = parse(input);
    errors
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("expected a parse error for {:?}, got none", input))
}

/// Parses a single function body's statements, wrapping `body` in
/// `int main() { ... }`.
pub(super) fn parse_main_body(body: &str) -> Vec<crate::ast::Stmt> {
    let input = format!("int main() {{ {body} }}");
    let program = parse_ok(&input);
    match program.declarations.into_iter().next() {
        Some(Declaration::Function(f)) => f.body.expect("main should have a body"),
        other => panic!("expected a function declaration, got {:?}", other),
    }
}

/// Parses a single expression statement and returns its expression.
pub(super) fn parse_expr_in_main(expr_src: &str) -> Expr {
    let mut stmts = parse_main_body(&format!("{expr_src};"));
    assert_eq!(stmts.len(), 1, "expected exactly one statement");
    match stmts.remove(0).kind {
        StmtKind::ExprStmt(Some(expr)) => expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}
