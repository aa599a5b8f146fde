//! Statement analysis.
//!
//! Recurses structurally over the statement tree. Every function here
//! records errors directly into the analyzer's error list rather than
//! returning a `Result`: a failure in one statement must not stop sibling
//! statements (or the rest of the enclosing block) from being checked too.

use crate::ast::{DataType, Stmt, StmtKind, VariableDecl};
use crate::token::Span;

use super::symbol::VariableInfo;
use super::SemanticAnalyzer;

impl SemanticAnalyzer {
    pub(super) fn analyze_stmt(&mut self, stmt: &mut Stmt) {
        match &mut stmt.kind {
            StmtKind::Compound(stmts) => self.analyze_compound(stmts),
            StmtKind::VariableDecl(decl) => self.analyze_variable_decl(decl),
            StmtKind::If { condition, then_branch, else_branch } => {
                self.check_condition(condition);
                self.analyze_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.analyze_stmt(else_branch);
                }
            }
            StmtKind::While { condition, body } => {
                self.check_condition(condition);
                self.analyze_stmt(body);
            }
            StmtKind::For { init, condition, update, body } => {
                self.symbols.enter_scope();
                if let Some(init) = init {
                    self.analyze_stmt(init);
                }
                if let Some(condition) = condition {
                    self.check_condition(condition);
                }
                if let Some(update) = update {
                    self.analyze_expr(update);
                }
                self.analyze_stmt(body);
                self.symbols.exit_scope();
            }
            StmtKind::Return(value) => self.analyze_return(value.as_mut(), stmt.span),
            StmtKind::ExprStmt(value) => {
                if let Some(value) = value {
                    self.analyze_expr(value);
                }
            }
        }
    }

    fn analyze_compound(&mut self, stmts: &mut [Stmt]) {
        self.symbols.enter_scope();
        for stmt in stmts.iter_mut() {
            self.analyze_stmt(stmt);
        }
        self.symbols.exit_scope();
    }

    fn check_condition(&mut self, condition: &mut crate::ast::Expr) {
        let ty = self.analyze_expr(condition);
        if !ty.is_numeric() {
            self.record(super::SemanticError::invalid_condition_type(
                &ty.to_string(),
                condition.span,
                &self.context(),
            ));
        }
    }

    fn analyze_return(&mut self, value: Option<&mut crate::ast::Expr>, span: Span) {
        let Some(function) = self.current_function.clone() else {
            // Only reachable if `analyze_stmt` is ever invoked outside
            // `analyze_function`; every caller in this module goes through it.
            return;
        };

        match value {
            None => {
                if function.return_type != DataType::Void {
                    self.record(super::SemanticError::missing_return_value(
                        &function.name,
                        &function.return_type.to_string(),
                        span,
                        &function.name,
                    ));
                }
            }
            Some(value) => {
                if function.return_type == DataType::Void {
                    self.record(super::SemanticError::unexpected_return_value(
                        &function.name,
                        value.span,
                        &function.name,
                    ));
                    return;
                }
                let value_ty = self.analyze_expr(value);
                if value_ty != function.return_type {
                    self.record(super::SemanticError::type_mismatch(
                        &function.return_type.to_string(),
                        &value_ty.to_string(),
                        value.span,
                        &function.name,
                    ));
                }
            }
        }
    }

    /// Shared by local and global variable declarations: check the
    /// initializer's type, then declare the binding in the current scope
    /// (the global scope, for a top-level declaration).
    pub(super) fn analyze_variable_decl(&mut self, decl: &mut VariableDecl) {
        if let Some(init) = &mut decl.init {
            let init_ty = self.analyze_expr(init);
            if init_ty != decl.ty {
                self.record(super::SemanticError::type_mismatch(
                    &decl.ty.to_string(),
                    &init_ty.to_string(),
                    init.span,
                    &self.context(),
                ));
            }
        }

        let info = VariableInfo { name: decl.name.clone(), ty: decl.ty, span: decl.span };
        if self.symbols.declare_variable(info).is_some() {
            self.record(super::SemanticError::duplicate_variable(&decl.name, decl.span, &self.context()));
        }
    }
}
