//! Semantic analysis for TinyC.
//!
//! This module provides the [`SemanticAnalyzer`], which walks a [`Program`]
//! in two passes and annotates every [`Expr`](crate::ast::Expr) with its
//! inferred [`DataType`](crate::ast::DataType).
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lexer → Parser → Semantic Analyzer → Codegen → Assembly
//! ```
//!
//! Unlike the parser, the analyzer never stops early: every sibling
//! declaration, statement, and argument is still checked after a local
//! failure, so one run can report every semantic error in the program.
//! Errors accumulate into a `Vec<SemanticError>` with no cap.
//!
//! # Builtins
//!
//! The four runtime functions (`print`, `print_int`, `print_char`,
//! `read_int`) are registered as already-defined library functions before
//! any user declaration is hoisted, so source code can call them without
//! writing a prototype. A user declaration that collides with a builtin
//! name is treated as an ordinary duplicate-function error.

mod error;
mod expr;
mod stmt;
mod symbol;

#[cfg(test)]
mod tests;

pub use error::{SemanticError, SemanticErrorKind};

use crate::ast::{DataType, Declaration, FunctionDecl, Program};
use crate::token::Span;
use symbol::{FunctionInfo, SymbolTable};

/// System V passes integer-class arguments in six registers
/// (`%rdi %rsi %rdx %rcx %r8 %r9`); codegen marshals parameters and call
/// arguments through exactly those, so a declaration or call past this
/// count is rejected here rather than reaching codegen at all.
const MAX_PARAMETERS: usize = 6;

#[derive(Debug, Clone)]
struct FunctionContext {
    name: String,
    return_type: DataType,
}

/// Semantic analyzer for TinyC programs.
///
/// `analyze` mutably annotates the AST's expressions with inferred types
/// as a side effect; the symbol table itself is torn down with the
/// analyzer once analysis completes (codegen keeps its own stack-slot
/// bookkeeping, built fresh from the now-typed AST).
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
    errors: Vec<SemanticError>,
    current_function: Option<FunctionContext>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        SemanticAnalyzer {
            symbols: SymbolTable::new(),
            errors: Vec::new(),
            current_function: None,
        }
    }

    /// Analyzes a program, returning every semantic error found. An empty
    /// list means the AST is well-typed and codegen may proceed.
    pub fn analyze(mut self, program: &mut Program) -> Vec<SemanticError> {
        self.register_builtins();

        for declaration in &program.declarations {
            if let Declaration::Function(function) = declaration {
                self.hoist_function(function);
            }
        }

        for declaration in &mut program.declarations {
            match declaration {
                Declaration::Function(function) => {
                    if function.body.is_some() {
                        self.analyze_function(function);
                    }
                }
                Declaration::Variable(variable) => self.analyze_variable_decl(variable),
            }
        }

        self.errors
    }

    fn record(&mut self, err: SemanticError) {
        self.errors.push(err);
    }

    fn context(&self) -> String {
        match &self.current_function {
            Some(f) => f.name.clone(),
            None => "<global>".to_string(),
        }
    }

    fn register_builtins(&mut self) {
        let builtins: [(&str, DataType, &[DataType]); 4] = [
            ("print", DataType::Void, &[DataType::CharPtr]),
            ("print_int", DataType::Void, &[DataType::Int]),
            ("print_char", DataType::Void, &[DataType::Char]),
            ("read_int", DataType::Int, &[]),
        ];
        for (name, return_type, param_types) in builtins {
            self.symbols.declare_function(FunctionInfo {
                name: name.to_string(),
                return_type,
                param_types: param_types.to_vec(),
                defined: true,
                span: Span::dummy(),
            });
        }
    }

    /// Pass 1: hoist a function's signature into global scope.
    ///
    /// A prototype followed by a matching definition is accepted (§9 open
    /// question, resolved): only two definitions, or two declarations with
    /// incompatible signatures, are an error.
    fn hoist_function(&mut self, function: &FunctionDecl) {
        if function.params.len() > MAX_PARAMETERS {
            self.record(SemanticError::too_many_parameters(
                &function.name,
                function.params.len(),
                MAX_PARAMETERS,
                function.span,
                "<global>",
            ));
        }

        let incoming = FunctionInfo {
            name: function.name.clone(),
            return_type: function.return_type,
            param_types: function.params.iter().map(|p| p.ty).collect(),
            defined: function.body.is_some(),
            span: function.span,
        };

        let Some(existing) = self.symbols.lookup_function(&function.name).cloned() else {
            self.symbols.declare_function(incoming);
            return;
        };

        let same_signature =
            existing.return_type == incoming.return_type && existing.param_types == incoming.param_types;
        if !same_signature {
            self.record(SemanticError::incompatible_redeclaration(&function.name, function.span, "<global>"));
            return;
        }

        if existing.defined && incoming.defined {
            self.record(SemanticError::duplicate_function(&function.name, function.span, "<global>"));
            return;
        }

        self.symbols.declare_function(FunctionInfo {
            defined: existing.defined || incoming.defined,
            ..incoming
        });
    }

    /// Pass 2, function case: push one scope for parameters and body
    /// together, then analyze statements in source order.
    fn analyze_function(&mut self, function: &mut FunctionDecl) {
        self.current_function = Some(FunctionContext {
            name: function.name.clone(),
            return_type: function.return_type,
        });
        self.symbols.enter_scope();

        for param in &function.params {
            let info = symbol::VariableInfo { name: param.name.clone(), ty: param.ty, span: param.span };
            if self.symbols.declare_variable(info).is_some() {
                self.record(SemanticError::duplicate_parameter(&param.name, param.span, &function.name));
            }
        }

        if let Some(body) = &mut function.body {
            for stmt in body.iter_mut() {
                self.analyze_stmt(stmt);
            }
        }

        self.symbols.exit_scope();
        self.current_function = None;
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
