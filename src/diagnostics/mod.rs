//! Plain-text diagnostic reporting for the `tinyc` CLI binary (§7).
//!
//! No source-snippet rendering, no color, no help text beyond the message
//! itself — just one line per error on stderr, in the exact formats §7
//! prescribes. This is a binary-only concern: the library crate reports
//! errors as plain data ([`crate::parser::ParseError`],
//! [`crate::semantic::SemanticError`]); only `main.rs` decides how to print
//! them.

use crate::parser::ParseError;
use crate::semantic::SemanticError;

/// Prints one line per parse error: `Error at line L, column C: msg`.
pub fn report_parse_errors(errors: &[ParseError]) {
    for error in errors {
        eprintln!(
            "Error at line {}, column {}: {}",
            error.span.line, error.span.column, error.message
        );
    }
}

/// Prints one line per semantic error:
/// `Semantic error at line L, column C in <ctx>: msg`.
pub fn report_semantic_errors(errors: &[SemanticError]) {
    for error in errors {
        eprintln!(
            "Semantic error at line {}, column {} in {}: {}",
            error.line(),
            error.column(),
            error.context(),
            error.message()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Span;

    #[test]
    fn parse_error_format_matches_the_spec_exactly() {
        let errors = vec![ParseError {
            message: "Expected ';', found '}'".to_string(),
            span: Span::new(0, 0, 3, 7),
        }];
        report_parse_errors(&errors);
    }

    #[test]
    fn semantic_error_format_matches_the_spec_exactly() {
        let error = SemanticError::undefined_variable("x", Span::new(0, 0, 1, 5), "main");
        assert_eq!(error.line(), 1);
        assert_eq!(error.column(), 5);
        assert_eq!(error.context(), "main");
        assert_eq!(error.message(), "Undefined identifier 'x'");
    }
}
