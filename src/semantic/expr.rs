//! Expression type checking.
//!
//! Analysis is bottom-up: each call both mutates the expression's `ty`
//! field with the inferred [`DataType`] and returns that type so the caller
//! can keep checking without re-walking the tree. Errors are pushed onto
//! the analyzer's error list and analysis continues with a best-effort
//! type (see the module doc on [`super::SemanticAnalyzer`]).

use crate::ast::{BinaryOperator, DataType, Expr, ExprKind, UnaryOperator};

use super::SemanticAnalyzer;

impl SemanticAnalyzer {
    pub(super) fn analyze_expr(&mut self, expr: &mut Expr) -> DataType {
        let ty = match &mut expr.kind {
            ExprKind::Number(_) => DataType::Int,
            ExprKind::String(_) => DataType::CharPtr,
            ExprKind::Identifier(name) => self.analyze_identifier(name, expr.span),
            ExprKind::Call { callee, args } => self.analyze_call(callee, args, expr.span),
            ExprKind::BinaryOp { op, left, right } => self.analyze_binary_op(*op, left, right, expr.span),
            ExprKind::UnaryOp { op, operand } => self.analyze_unary_op(*op, operand, expr.span),
        };
        expr.ty = Some(ty);
        ty
    }

    fn analyze_identifier(&mut self, name: &str, span: crate::token::Span) -> DataType {
        match self.symbols.lookup_variable(name) {
            Some(info) => info.ty,
            None => {
                self.record(super::SemanticError::undefined_variable(name, span, &self.context()));
                DataType::Void
            }
        }
    }

    fn analyze_call(&mut self, callee: &str, args: &mut [Expr], span: crate::token::Span) -> DataType {
        let Some(info) = self.symbols.lookup_function(callee).cloned() else {
            self.record(super::SemanticError::undefined_function(callee, span, &self.context()));
            for arg in args.iter_mut() {
                self.analyze_expr(arg);
            }
            return DataType::Void;
        };

        if args.len() != info.param_types.len() {
            self.record(super::SemanticError::argument_count_mismatch(
                callee,
                info.param_types.len(),
                args.len(),
                span,
                &self.context(),
            ));
        }

        for (index, arg) in args.iter_mut().enumerate() {
            let arg_ty = self.analyze_expr(arg);
            if let Some(expected) = info.param_types.get(index)
                && arg_ty != *expected
            {
                self.record(super::SemanticError::argument_type_mismatch(
                    callee,
                    index,
                    &expected.to_string(),
                    &arg_ty.to_string(),
                    arg.span,
                    &self.context(),
                ));
            }
        }

        // Reported but not fatal: the declared return type lets the caller
        // keep checking the surrounding expression.
        info.return_type
    }

    fn analyze_binary_op(
        &mut self,
        op: BinaryOperator,
        left: &mut Expr,
        right: &mut Expr,
        span: crate::token::Span,
    ) -> DataType {
        if op == BinaryOperator::Assign {
            return self.analyze_assignment(left, right, span);
        }

        let left_ty = self.analyze_expr(left);
        let right_ty = self.analyze_expr(right);

        match op {
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod => {
                if !left_ty.is_numeric() {
                    self.record(super::SemanticError::invalid_binary_operand(
                        op,
                        &left_ty.to_string(),
                        left.span,
                        &self.context(),
                    ));
                }
                if !right_ty.is_numeric() {
                    self.record(super::SemanticError::invalid_binary_operand(
                        op,
                        &right_ty.to_string(),
                        right.span,
                        &self.context(),
                    ));
                }
                DataType::Int
            }
            BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::Lt
            | BinaryOperator::LtEq
            | BinaryOperator::Gt
            | BinaryOperator::GtEq => {
                if left_ty != right_ty {
                    self.record(super::SemanticError::type_mismatch(
                        &left_ty.to_string(),
                        &right_ty.to_string(),
                        span,
                        &self.context(),
                    ));
                }
                DataType::Int
            }
            BinaryOperator::And | BinaryOperator::Or => {
                if !left_ty.is_numeric() {
                    self.record(super::SemanticError::invalid_binary_operand(
                        op,
                        &left_ty.to_string(),
                        left.span,
                        &self.context(),
                    ));
                }
                if !right_ty.is_numeric() {
                    self.record(super::SemanticError::invalid_binary_operand(
                        op,
                        &right_ty.to_string(),
                        right.span,
                        &self.context(),
                    ));
                }
                DataType::Int
            }
            BinaryOperator::Assign => unreachable!("handled above"),
        }
    }

    /// `=` requires an identifier left-hand side (§9 open question,
    /// resolved: the analyzer enforces lvalue-ness here rather than leaving
    /// it to codegen).
    fn analyze_assignment(&mut self, left: &mut Expr, right: &mut Expr, span: crate::token::Span) -> DataType {
        let is_identifier = matches!(left.kind, ExprKind::Identifier(_));
        let left_ty = self.analyze_expr(left);
        let right_ty = self.analyze_expr(right);

        if !is_identifier {
            self.record(super::SemanticError::invalid_assignment_target(left.span, &self.context()));
            return right_ty;
        }

        if left_ty != right_ty {
            self.record(super::SemanticError::type_mismatch(
                &left_ty.to_string(),
                &right_ty.to_string(),
                span,
                &self.context(),
            ));
        }

        left_ty
    }

    fn analyze_unary_op(&mut self, op: UnaryOperator, operand: &mut Expr, span: crate::token::Span) -> DataType {
        let operand_ty = self.analyze_expr(operand);
        if !operand_ty.is_numeric() {
            self.record(super::SemanticError::invalid_unary_operand(
                op,
                &operand_ty.to_string(),
                span,
                &self.context(),
            ));
        }
        DataType::Int
    }
}
