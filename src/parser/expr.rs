//! Expression parsing: one recursive-descent method per precedence level.
//!
//! ```text
//! expression   := assignment
//! assignment   := logical_or [ '=' assignment ]            (right-associative)
//! logical_or   := logical_and ( '||' logical_and )*
//! logical_and  := equality    ( '&&' equality    )*
//! equality     := relational  ( ('=='|'!=') relational  )*
//! relational   := additive    ( ('<'|'<='|'>'|'>=') additive )*
//! additive     := multiplicative ( ('+'|'-') multiplicative )*
//! multiplicative := unary     ( ('*'|'/'|'%') unary     )*
//! unary        := ('!'|'-'|'+') unary | postfix
//! postfix      := primary ( '(' [ expression ( ',' expression )* ] ')' )*
//! primary      := NUMBER | STRING | IDENT | '(' expression ')'
//! ```
//!
//! Every other binary level is left-associative; `=` alone is
//! right-associative, matching `a = b = 1`.

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOperator, Expr, ExprKind, UnaryOperator};
use crate::token::{Span, TokenKind};

fn combine(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    let span = Span::new(
        left.span.start,
        right.span.end,
        left.span.line,
        left.span.column,
    );
    Expr::new(
        ExprKind::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_logical_or()?;
        if matches!(self.current_kind(), TokenKind::Equal) {
            self.advance();
            let right = self.parse_assignment()?;
            return Ok(combine(left, BinaryOperator::Assign, right));
        }
        Ok(left)
    }

    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;
        while matches!(self.current_kind(), TokenKind::PipePipe) {
            self.advance();
            let right = self.parse_logical_and()?;
            left = combine(left, BinaryOperator::Or, right);
        }
        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while matches!(self.current_kind(), TokenKind::AmpAmp) {
            self.advance();
            let right = self.parse_equality()?;
            left = combine(left, BinaryOperator::And, right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::EqualEqual => BinaryOperator::Eq,
                TokenKind::BangEqual => BinaryOperator::NotEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_relational()?;
            left = combine(left, op, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Less => BinaryOperator::Lt,
                TokenKind::LessEqual => BinaryOperator::LtEq,
                TokenKind::Greater => BinaryOperator::Gt,
                TokenKind::GreaterEqual => BinaryOperator::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            left = combine(left, op, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = combine(left, op, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinaryOperator::Mul,
                TokenKind::Slash => BinaryOperator::Div,
                TokenKind::Percent => BinaryOperator::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = combine(left, op, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();
        let op = match self.current_kind() {
            TokenKind::Bang => Some(UnaryOperator::Not),
            TokenKind::Minus => Some(UnaryOperator::Neg),
            TokenKind::Plus => Some(UnaryOperator::Plus),
            _ => None,
        };

        let Some(op) = op else {
            return self.parse_postfix();
        };

        self.advance();
        let operand = self.parse_unary()?;
        let span = Span::new(
            start_span.start,
            operand.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Expr::new(
            ExprKind::UnaryOp {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `postfix := primary ( '(' args ')' )*`. The call restriction lives
    /// here: `(...)` only extends a bare identifier into a `Call`; anything
    /// else followed by `(` is `"Can only call identifiers"`.
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while matches!(self.current_kind(), TokenKind::LeftParen) {
            let callee = match &expr.kind {
                ExprKind::Identifier(name) => name.clone(),
                _ => return Err(ParseError::can_only_call_identifiers(expr.span)),
            };
            expr = self.parse_call(callee, expr.span)?;
        }
        Ok(expr)
    }

    fn parse_call(&mut self, callee: String, start_span: Span) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut args = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RightParen)?;

        let span = Span::new(
            start_span.start,
            end_span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Expr::new(ExprKind::Call { callee, args }, span))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        match self.current_kind().clone() {
            TokenKind::Integer(text) => {
                self.advance();
                // The lexer already rejected anything that doesn't fit i64.
                let value = text.parse::<i64>().map_err(|_| {
                    ParseError::new(format!("Integer literal out of range: '{text}'"), span)
                })?;
                Ok(Expr::new(ExprKind::Number(value), span))
            }
            TokenKind::StringLiteral(text) => {
                self.advance();
                Ok(Expr::new(ExprKind::String(text), span))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::Identifier(name), span))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let close_span = self.current_span();
                self.expect(&TokenKind::RightParen)?;
                let full_span = Span::new(span.start, close_span.end, span.line, span.column);
                Ok(Expr::new(inner.kind, full_span))
            }
            TokenKind::Error(msg) => Err(ParseError::new(msg, span)),
            other => Err(ParseError::expected(
                "an expression",
                &Self::token_kind_display(&other),
                span,
            )),
        }
    }
}
