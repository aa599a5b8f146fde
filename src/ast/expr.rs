//! Expression nodes for the TinyC AST.

use crate::token::Span;

use super::types::DataType;

/// A binary operator spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl BinaryOperator {
    /// The operator's source spelling, as it appears in error messages.
    pub fn spelling(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Assign => "=",
            BinaryOperator::Eq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }
}

/// A unary operator spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Neg,
    /// `+`
    Plus,
    /// `!`
    Not,
}

impl UnaryOperator {
    /// The operator's source spelling, as it appears in error messages.
    pub fn spelling(&self) -> &'static str {
        match self {
            UnaryOperator::Neg => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Not => "!",
        }
    }
}

/// The kind of an expression in TinyC.
///
/// This enum represents the different types of expressions without source
/// location or inferred-type information. Use [`Expr`] for the full AST
/// node.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// An integer literal. Always typed `int` by the semantic analyzer.
    Number(i64),

    /// A string literal's escaped source text, un-decoded (the lexeme the
    /// lexer captured between the quotes, backslashes and all). Always
    /// typed `char*`.
    String(String),

    /// A variable or parameter reference, resolved during semantic
    /// analysis.
    Identifier(String),

    /// A function call. The callee must be a bare identifier — TinyC has
    /// no indirect calls through function pointers.
    Call {
        /// The name of the function being called.
        callee: String,
        /// The argument expressions, evaluated left to right.
        args: Vec<Expr>,
    },

    /// A binary operation, including assignment (`=`).
    BinaryOp {
        /// Which operator.
        op: BinaryOperator,
        /// The left operand.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A unary operation.
    UnaryOp {
        /// Which operator.
        op: UnaryOperator,
        /// The operand.
        operand: Box<Expr>,
    },
}

/// An expression in TinyC with source location and (once semantic analysis
/// has run) an inferred [`DataType`].
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
    /// The type the semantic analyzer inferred for this expression. `None`
    /// until semantic analysis has run over the node.
    pub ty: Option<DataType>,
}

impl Expr {
    /// Creates a new expression with the given kind and span. The inferred
    /// type starts out unset; the semantic analyzer fills it in.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            span,
            ty: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expr_has_no_type() {
        let expr = Expr::new(ExprKind::Number(5), Span::dummy());
        assert!(expr.ty.is_none());
    }

    #[test]
    fn test_binary_operator_spelling() {
        assert_eq!(BinaryOperator::LtEq.spelling(), "<=");
        assert_eq!(BinaryOperator::Assign.spelling(), "=");
    }

    #[test]
    fn test_unary_operator_spelling() {
        assert_eq!(UnaryOperator::Not.spelling(), "!");
    }
}
