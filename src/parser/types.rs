//! Type annotation parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::DataType;
use crate::token::TokenKind;

impl Parser {
    /// Parses a type annotation.
    ///
    /// # Grammar
    ///
    /// ```text
    /// type := 'int' | 'void' | 'char' ['*']
    /// ```
    pub(super) fn parse_type(&mut self) -> Result<DataType, ParseError> {
        let base = match self.current_kind() {
            TokenKind::Int => {
                self.advance();
                DataType::Int
            }
            TokenKind::Void => {
                self.advance();
                DataType::Void
            }
            TokenKind::Char => {
                self.advance();
                if matches!(self.current_kind(), TokenKind::Star) {
                    self.advance();
                    DataType::CharPtr
                } else {
                    DataType::Char
                }
            }
            _ => {
                return Err(ParseError::expected(
                    "a type ('int', 'char' or 'void')",
                    &Self::token_kind_display(self.current_kind()),
                    self.current_span(),
                ));
            }
        };
        Ok(base)
    }
}
