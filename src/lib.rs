//! The TinyC compiler library.
//!
//! This library provides the core components of the TinyC compiler:
//! lexical analysis, parsing, semantic analysis, and x86-64 assembly code
//! generation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`semantic`] - Name resolution and type checking
//! - [`codegen`] - x86-64 AT&T assembly code generation
//!
//! Diagnostics reporting and build/link orchestration are CLI-only
//! concerns and live under `src/diagnostics/` and `src/driver/`, compiled
//! only into the `tinyc` binary rather than this library.
//!
//! # Example
//!
//! ```no_run
//! use tinyc::codegen::Codegen;
//! use tinyc::lexer::Lexer;
//! use tinyc::parser::Parser;
//! use tinyc::semantic::SemanticAnalyzer;
//!
//! let source = r#"
//!     int main() {
//!         print("Hello, World!");
//!         return 0;
//!     }
//! "#;
//!
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//! let (mut program, parse_errors) = Parser::new(tokens).parse();
//! assert!(parse_errors.is_empty());
//!
//! let semantic_errors = SemanticAnalyzer::new().analyze(&mut program);
//! assert!(semantic_errors.is_empty());
//!
//! let assembly = Codegen::compile(&program);
//! assert!(assembly.contains(".global main"));
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod token;
