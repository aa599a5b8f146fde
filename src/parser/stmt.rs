//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind, VariableDecl};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement := compound | if | while | for | return | declaration | expr_stmt
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::LeftBrace => self.parse_compound_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::Int | TokenKind::Char | TokenKind::Void => self.parse_local_declaration(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// `compound := '{' statement* '}'`. Recovers from a bad statement by
    /// synchronizing and continuing with the next one, so one typo doesn't
    /// swallow the rest of the block.
    pub(super) fn parse_compound_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::LeftBrace)?;

        let mut stmts = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(err) => {
                    self.record_error(err);
                    self.synchronize();
                }
            }
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RightBrace)?;
        let span = Span::new(start_span.start, end_span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::Compound(stmts), span))
    }

    /// A local variable declaration. `declaration`'s `func_rest` branch
    /// (nested function definitions) has no representation in `StmtKind`
    /// and is rejected here rather than accepted and silently dropped.
    pub(super) fn parse_local_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        let ty = self.parse_type()?;
        let name_span = self.current_span();
        let name = self.expect_identifier()?;

        if matches!(self.current_kind(), TokenKind::LeftParen) {
            return Err(ParseError::nested_function_not_supported(name_span));
        }

        let init = if matches!(self.current_kind(), TokenKind::Equal) {
            self.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };

        let semi_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        let span = Span::new(start_span.start, semi_span.end, start_span.line, start_span.column);

        Ok(Stmt::new(
            StmtKind::VariableDecl(VariableDecl {
                ty,
                name,
                init,
                span,
            }),
            span,
        ))
    }

    /// `if := 'if' '(' expression ')' statement [ 'else' statement ]`
    pub(super) fn parse_if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;

        let then_branch = Box::new(self.parse_stmt()?);

        let else_branch = if matches!(self.current_kind(), TokenKind::Else) {
            self.advance();
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };

        let end = else_branch
            .as_ref()
            .map(|stmt| stmt.span.end)
            .unwrap_or(then_branch.span.end);
        let span = Span::new(start_span.start, end, start_span.line, start_span.column);

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// `while := 'while' '(' expression ')' statement`
    pub(super) fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_stmt()?);

        let span = Span::new(start_span.start, body.span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    /// `for := 'for' '(' ( declaration | expr_stmt | ';' ) [ expression ] ';'
    ///                 [ expression ] ')' statement`
    pub(super) fn parse_for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LeftParen)?;

        let init = if matches!(self.current_kind(), TokenKind::Semicolon) {
            self.advance();
            None
        } else if matches!(
            self.current_kind(),
            TokenKind::Int | TokenKind::Char | TokenKind::Void
        ) {
            Some(Box::new(self.parse_local_declaration()?))
        } else {
            Some(Box::new(self.parse_expr_stmt()?))
        };

        let condition = if matches!(self.current_kind(), TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let update = if matches!(self.current_kind(), TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_stmt()?);

        let span = Span::new(start_span.start, body.span.end, start_span.line, start_span.column);
        Ok(Stmt::new(
            StmtKind::For {
                init,
                condition,
                update,
                body,
            },
            span,
        ))
    }

    /// `return := 'return' [ expression ] ';'`
    pub(super) fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Return)?;

        if matches!(self.current_kind(), TokenKind::Semicolon) {
            let semi_span = self.current_span();
            self.advance();
            let span = Span::new(start_span.start, semi_span.end, start_span.line, start_span.column);
            return Ok(Stmt::new(StmtKind::Return(None), span));
        }

        let value = self.parse_expr()?;
        let semi_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        let span = Span::new(start_span.start, semi_span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::Return(Some(value)), span))
    }

    /// `expr_stmt := [ expression ] ';'`
    pub(super) fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();

        if matches!(self.current_kind(), TokenKind::Semicolon) {
            let semi_span = self.current_span();
            self.advance();
            let span = Span::new(start_span.start, semi_span.end, start_span.line, start_span.column);
            return Ok(Stmt::new(StmtKind::ExprStmt(None), span));
        }

        let expr = self.parse_expr()?;
        let semi_span = self.current_span();
        self.expect(&TokenKind::Semicolon)?;
        let span = Span::new(start_span.start, semi_span.end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::ExprStmt(Some(expr)), span))
    }
}
