//! Top-level declaration parsing: functions and global variables.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Declaration, DataType, FunctionDecl, Parameter, StmtKind, VariableDecl};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a single top-level declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// declaration := type IDENT ( func_rest | var_rest )
    /// ```
    pub(super) fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let start_span = self.current_span();
        let ty = self.parse_type()?;
        let name = self.expect_identifier()?;

        if matches!(self.current_kind(), TokenKind::LeftParen) {
            self.parse_function_rest(ty, name, start_span)
                .map(Declaration::Function)
        } else {
            self.parse_variable_rest(ty, name, start_span)
                .map(Declaration::Variable)
        }
    }

    /// `func_rest := '(' [ param ( ',' param )* ] ')' ( ';' | compound )`
    fn parse_function_rest(
        &mut self,
        return_type: DataType,
        name: String,
        start_span: Span,
    ) -> Result<FunctionDecl, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut params = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                params.push(self.parse_param()?);
                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RightParen)?;

        if matches!(self.current_kind(), TokenKind::Semicolon) {
            let semi_span = self.current_span();
            self.advance();
            let span = Span::new(start_span.start, semi_span.end, start_span.line, start_span.column);
            return Ok(FunctionDecl {
                return_type,
                name,
                params,
                body: None,
                span,
            });
        }

        let body_stmt = self.parse_compound_stmt()?;
        let body_end = body_stmt.span.end;
        let body = match body_stmt.kind {
            StmtKind::Compound(stmts) => stmts,
            _ => unreachable!("parse_compound_stmt only ever returns StmtKind::Compound"),
        };
        let span = Span::new(start_span.start, body_end, start_span.line, start_span.column);

        Ok(FunctionDecl {
            return_type,
            name,
            params,
            body: Some(body),
            span,
        })
    }

    /// `param := type IDENT`
    fn parse_param(&mut self) -> Result<Parameter, ParseError> {
        let span = self.current_span();
        let ty = self.parse_type()?;
        let name = self.expect_identifier()?;
        Ok(Parameter { ty, name, span })
    }

    /// `var_rest := [ '=' expression ] ';'`
    fn parse_variable_rest(
        &mut self,
        ty: DataType,
        name: String,
        start_span: Span,
    ) -> Result<VariableDecl, ParseError> {
        let init = if matches!(self.current_kind(), TokenKind::Equal) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };

        let semi_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        let span = Span::new(start_span.start, semi_span.end, start_span.line, start_span.column);

        Ok(VariableDecl {
            ty,
            name,
            init,
            span,
        })
    }
}
