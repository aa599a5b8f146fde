//! Semantic analysis error types.
//!
//! This module defines [`SemanticError`], which represents errors that can
//! occur during semantic analysis (name resolution, type checking, etc.).
//! Unlike [`crate::parser::ParseError`], every `SemanticError` carries a
//! `context`: the name of the enclosing function, or `"<global>"` for
//! errors found while checking a top-level variable initializer.

use crate::ast::{BinaryOperator, UnaryOperator};
use crate::token::Span;

/// The kind of semantic analysis error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticErrorKind {
    /// A function was declared more than once with an incompatible signature.
    DuplicateFunction,
    /// A variable was defined more than once in the same scope.
    DuplicateVariable,
    /// A parameter name repeats within one parameter list.
    DuplicateParameter,
    /// An identifier was referenced but no variable of that name is in scope.
    UndefinedVariable,
    /// A call named a function that was never declared.
    UndefinedFunction,
    /// A call's argument count didn't match the callee's parameter count.
    ArgumentCountMismatch,
    /// Two types that were required to match did not.
    TypeMismatch,
    /// The left-hand side of `=` was not a bare identifier.
    InvalidAssignmentTarget,
    /// A condition (`if`/`while`/`for`) was not of boolean-context type.
    InvalidConditionType,
    /// An operand to an arithmetic, comparison, or logical operator had the
    /// wrong type.
    InvalidOperandType,
    /// A function was declared with more parameters than codegen can
    /// marshal through argument registers.
    TooManyParameters,
}

/// An error found during semantic analysis.
///
/// Carries a human-readable message, the source location where the error
/// was found, and the name of the enclosing function (`"<global>"` for
/// errors outside any function body).
#[derive(Debug, Clone)]
pub struct SemanticError {
    kind: SemanticErrorKind,
    message: String,
    span: Span,
    context: String,
}

impl SemanticError {
    fn new(
        kind: SemanticErrorKind,
        message: impl Into<String>,
        span: Span,
        context: impl Into<String>,
    ) -> Self {
        SemanticError {
            kind,
            message: message.into(),
            span,
            context: context.into(),
        }
    }

    pub fn duplicate_function(name: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::DuplicateFunction,
            format!("Function '{name}' already declared"),
            span,
            context,
        )
    }

    pub fn incompatible_redeclaration(name: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::DuplicateFunction,
            format!("Function '{name}' redeclared with a different signature"),
            span,
            context,
        )
    }

    pub fn duplicate_variable(name: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::DuplicateVariable,
            format!("Variable '{name}' already declared in this scope"),
            span,
            context,
        )
    }

    pub fn duplicate_parameter(name: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::DuplicateParameter,
            format!("Parameter '{name}' already declared"),
            span,
            context,
        )
    }

    pub fn undefined_variable(name: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::UndefinedVariable,
            format!("Undefined identifier '{name}'"),
            span,
            context,
        )
    }

    pub fn undefined_function(name: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::UndefinedFunction,
            format!("Undefined function '{name}'"),
            span,
            context,
        )
    }

    pub fn argument_count_mismatch(
        name: &str,
        expected: usize,
        found: usize,
        span: Span,
        context: &str,
    ) -> Self {
        Self::new(
            SemanticErrorKind::ArgumentCountMismatch,
            format!("Function '{name}' expects {expected} argument(s), found {found}"),
            span,
            context,
        )
    }

    pub fn argument_type_mismatch(
        name: &str,
        index: usize,
        expected: &str,
        found: &str,
        span: Span,
        context: &str,
    ) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!(
                "Argument {} to '{name}' has type '{found}', expected '{expected}'",
                index + 1
            ),
            span,
            context,
        )
    }

    pub fn type_mismatch(expected: &str, found: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!("Type mismatch: expected '{expected}', found '{found}'"),
            span,
            context,
        )
    }

    pub fn invalid_assignment_target(span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::InvalidAssignmentTarget,
            "Left-hand side of '=' must be an identifier",
            span,
            context,
        )
    }

    pub fn invalid_condition_type(found: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::InvalidConditionType,
            format!("Condition must have a numeric (boolean-context) type, found '{found}'"),
            span,
            context,
        )
    }

    pub fn invalid_binary_operand(op: BinaryOperator, found: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::InvalidOperandType,
            format!(
                "Operator '{}' requires a numeric operand, found '{found}'",
                op.spelling()
            ),
            span,
            context,
        )
    }

    pub fn invalid_unary_operand(op: UnaryOperator, found: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::InvalidOperandType,
            format!(
                "Operator '{}' requires a numeric operand, found '{found}'",
                op.spelling()
            ),
            span,
            context,
        )
    }

    pub fn missing_return_value(function: &str, return_type: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!("Function '{function}' must return a value of type '{return_type}'"),
            span,
            context,
        )
    }

    pub fn unexpected_return_value(function: &str, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::TypeMismatch,
            format!("Function '{function}' is 'void' and cannot return a value"),
            span,
            context,
        )
    }

    pub fn too_many_parameters(name: &str, found: usize, max: usize, span: Span, context: &str) -> Self {
        Self::new(
            SemanticErrorKind::TooManyParameters,
            format!("Function '{name}' has {found} parameters, but at most {max} are supported"),
            span,
            context,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn kind(&self) -> SemanticErrorKind {
        self.kind
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} in {}: {}",
            self.span.line, self.span.column, self.context, self.message
        )
    }
}

impl std::error::Error for SemanticError {}
