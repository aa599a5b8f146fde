//! Statement nodes for the TinyC AST.

use crate::token::Span;

use super::expr::Expr;
use super::program::VariableDecl;

/// The kind of a statement in TinyC.
///
/// This enum represents the different types of statements without source
/// location information. Use [`Stmt`] for the full AST node.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// A `{ ... }` block. Introduces a new lexical scope.
    Compound(Vec<Stmt>),

    /// A local variable declaration, legal anywhere a statement is legal
    /// (including inside a `for` loop's init clause).
    VariableDecl(VariableDecl),

    /// A conditional statement with an optional `else` branch.
    ///
    /// `else if` chains are represented as an `else_branch` containing a
    /// single nested `StmtKind::If`.
    If {
        /// The condition. Must have boolean-context type (`int` or `char`).
        condition: Expr,
        /// The statement executed when the condition is true.
        then_branch: Box<Stmt>,
        /// The statement executed when the condition is false, if any.
        else_branch: Option<Box<Stmt>>,
    },

    /// A `while` loop.
    While {
        /// The loop condition. Must have boolean-context type.
        condition: Expr,
        /// The statement executed for each iteration.
        body: Box<Stmt>,
    },

    /// A `for` loop. Any of the three clauses may be absent.
    For {
        /// The init clause: a declaration, an expression statement, or
        /// nothing (bare `;`).
        init: Option<Box<Stmt>>,
        /// The loop condition, checked before each iteration.
        condition: Option<Expr>,
        /// The update expression, evaluated after each iteration.
        update: Option<Expr>,
        /// The statement executed for each iteration.
        body: Box<Stmt>,
    },

    /// A `return` statement. `None` is a bare `return;`.
    Return(Option<Expr>),

    /// An expression statement, evaluated for its side effects and
    /// discarded. `None` is a bare `;`.
    ExprStmt(Option<Expr>),
}

/// A statement in TinyC with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{DataType, ExprKind};

    #[test]
    fn test_new_stmt() {
        let stmt = Stmt::new(StmtKind::ExprStmt(None), Span::dummy());
        assert!(matches!(stmt.kind, StmtKind::ExprStmt(None)));
    }

    #[test]
    fn test_return_with_value() {
        let expr = Expr::new(ExprKind::Number(0), Span::dummy());
        let stmt = Stmt::new(StmtKind::Return(Some(expr)), Span::dummy());
        match stmt.kind {
            StmtKind::Return(Some(e)) => assert!(matches!(e.kind, ExprKind::Number(0))),
            _ => panic!("expected Return(Some(_))"),
        }
    }

    #[test]
    fn test_variable_decl_statement() {
        let decl = VariableDecl {
            ty: DataType::Int,
            name: "x".to_string(),
            init: None,
            span: Span::dummy(),
        };
        let stmt = Stmt::new(StmtKind::VariableDecl(decl), Span::dummy());
        assert!(matches!(stmt.kind, StmtKind::VariableDecl(_)));
    }
}
