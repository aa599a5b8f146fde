//! Tests for the semantic analyzer, grouped by the kind of program feature
//! they exercise.
//!
//! [`analyze_source`] drives the real lexer and parser rather than
//! hand-building an AST: a lexer or parser bug would otherwise masquerade
//! as a semantic one.

mod function_tests;
mod main_tests;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::parser::Parser;

use super::{SemanticAnalyzer, SemanticError, SemanticErrorKind};

/// Lexes, parses, and semantically analyzes `source`, panicking if lexing
/// or parsing failed (a bad test fixture, not the thing under test).
fn analyze_source(source: &str) -> (Program, Vec<SemanticError>) {
    let tokens = Lexer::new(source).tokenize().expect("fixture must lex cleanly");
    let (mut program, parse_errors) = Parser::new(tokens).parse();
    assert!(parse_errors.is_empty(), "fixture must parse cleanly: {parse_errors:?}");

    let errors = SemanticAnalyzer::new().analyze(&mut program);
    (program, errors)
}

fn errors_of(source: &str) -> Vec<SemanticError> {
    analyze_source(source).1
}

fn assert_clean(source: &str) {
    let errors = errors_of(source);
    assert!(errors.is_empty(), "expected no semantic errors, got {errors:?}");
}

fn assert_single_kind(source: &str, kind: SemanticErrorKind) {
    let errors = errors_of(source);
    assert_eq!(errors.len(), 1, "expected exactly one error, got {errors:?}");
    assert_eq!(errors[0].kind(), kind);
}

const MAIN: &str = "int main() { return 0; }";

fn with_main(body: &str) -> String {
    format!("{body}\n{MAIN}")
}
