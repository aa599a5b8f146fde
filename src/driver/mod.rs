//! Orchestrates the lex → parse → semantic → codegen → assemble/link
//! pipeline (§6) behind the `tinyc` CLI binary.
//!
//! Each phase below is modeled as `(output, error_list)` per §9's error
//! accumulation guidance; between phases, any error halts the pipeline
//! before the next one runs (§7). Codegen itself never fails (§7) — it is
//! only ever reached once semantic analysis came back clean.

use std::path::{Path, PathBuf};

use crate::codegen::Codegen;
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::semantic::{SemanticAnalyzer, SemanticError};
use crate::token::Token;

mod link;

/// A compilation error from any phase of the pipeline.
pub enum CompileError {
    /// Failed to read the source file.
    FileReadError { path: String, source: std::io::Error },
    /// Lexing aborted outright (an unterminated block comment; §7).
    Lex(LexError),
    /// One or more parse errors; collected, not just the first (§7).
    Parse(Vec<ParseError>),
    /// One or more semantic errors; collected, not just the first (§7).
    Semantic(Vec<SemanticError>),
    /// Failed to write the generated assembly to `output`.
    WriteAssemblyError { path: String, source: std::io::Error },
    /// An error during linking.
    Link(LinkError),
    /// A path is not valid UTF-8.
    PathNotUtf8 { path: PathBuf, context: &'static str },
}

/// A linker error.
pub(crate) enum LinkError {
    /// Failed to execute the linker command.
    ExecutionFailed(std::io::Error),
    /// Failed to resolve the absolute path of the current executable.
    CurrentExecutablePathResolutionFailed(std::io::Error),
    /// Current executable path has no parent directory.
    CurrentExecutableParentNotFound { executable: PathBuf },
    /// TinyC runtime library was not found next to the tinyc executable.
    RuntimeLibraryNotFound { executable: PathBuf, path: PathBuf },
    /// TinyC runtime library path exists but is not a regular file.
    RuntimeLibraryNotAFile { executable: PathBuf, path: PathBuf },
    /// Failed to access the runtime library path due to an I/O error.
    RuntimeLibraryAccessFailed {
        executable: PathBuf,
        path: PathBuf,
        source: std::io::Error,
    },
    /// Linker exited with non-zero status.
    Failed {
        exit_code: String,
        stdout: String,
        stderr: String,
    },
}

impl std::fmt::Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkError::ExecutionFailed(io_err) => {
                write!(f, "Failed to run linker: {}", io_err)
            }
            LinkError::CurrentExecutablePathResolutionFailed(io_err) => {
                write!(f, "Failed to resolve current executable path: {}", io_err)
            }
            LinkError::CurrentExecutableParentNotFound { executable } => write!(
                f,
                "Current executable path '{}' has no parent directory. This is a compiler bug.",
                executable.display()
            ),
            LinkError::RuntimeLibraryNotFound { executable, path } => write!(
                f,
                "TinyC runtime library not found at '{}' (resolved from executable '{}'). Place the 'tinyc' executable and runtime library in the same directory.",
                path.display(),
                executable.display()
            ),
            LinkError::RuntimeLibraryNotAFile { executable, path } => write!(
                f,
                "TinyC runtime library path '{}' is not a regular file (resolved from executable '{}'). Place the 'tinyc' executable and runtime library in the same directory.",
                path.display(),
                executable.display()
            ),
            LinkError::RuntimeLibraryAccessFailed {
                executable,
                path,
                source,
            } => write!(
                f,
                "Failed to access TinyC runtime library path '{}' (resolved from executable '{}'): {}",
                path.display(),
                executable.display(),
                source
            ),
            LinkError::Failed {
                exit_code,
                stdout,
                stderr,
            } => {
                write!(f, "Linker failed with exit code {}", exit_code)?;
                if !stdout.is_empty() {
                    write!(f, "\n[stdout]\n{}", stdout)?;
                }
                if !stderr.is_empty() {
                    write!(f, "\n[stderr]\n{}", stderr)?;
                }
                Ok(())
            }
        }
    }
}

impl CompileError {
    fn path_not_utf8(path: impl Into<PathBuf>, context: &'static str) -> Self {
        CompileError::PathNotUtf8 {
            path: path.into(),
            context,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::FileReadError { path, source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
            CompileError::Lex(e) => write!(f, "{}", e),
            CompileError::Parse(errors) => write!(f, "{} parse error(s)", errors.len()),
            CompileError::Semantic(errors) => write!(f, "{} semantic error(s)", errors.len()),
            CompileError::WriteAssemblyError { path, source } => {
                write!(f, "Failed to write assembly to '{}': {}", path, source)
            }
            CompileError::Link(e) => write!(f, "{}", e),
            CompileError::PathNotUtf8 { path, context } => {
                write!(f, "{} path '{}' is not valid UTF-8", context, path.display())
            }
        }
    }
}

/// Debug-dump switches requested on the command line (§6).
#[derive(Default, Clone, Copy)]
pub struct DebugFlags {
    pub tokens: bool,
    pub ast: bool,
    pub symbols: bool,
}

/// Everything [`compile`] needs, independent of how `main.rs` parses argv.
pub struct Options<'a> {
    pub input: &'a str,
    pub output: &'a str,
    pub compile_only: bool,
    pub debug: DebugFlags,
}

/// Runs the full pipeline for `options`. On success, the generated assembly
/// has been written to `options.output`, and — unless `compile_only` —
/// linked into a native executable named after the input file's stem
/// (mirroring how `cc` itself derives `a.out`-adjacent names from input).
pub fn compile(options: &Options) -> Result<(), CompileError> {
    let source = std::fs::read_to_string(options.input).map_err(|e| CompileError::FileReadError {
        path: options.input.to_string(),
        source: e,
    })?;

    let tokens = lex(&source, options.debug)?;
    let mut program = parse(tokens, options.debug)?;
    analyze(&mut program, options.debug)?;

    let assembly = Codegen::compile(&program);
    std::fs::write(options.output, &assembly).map_err(|e| CompileError::WriteAssemblyError {
        path: options.output.to_string(),
        source: e,
    })?;
    println!("Wrote assembly: {}", options.output);

    if !options.compile_only {
        let executable_path = executable_path_for(options.input);
        link::link(Path::new(options.output), &executable_path)?;
        println!("Built: {}", executable_path.display());
    }

    Ok(())
}

fn lex(source: &str, debug: DebugFlags) -> Result<Vec<Token>, CompileError> {
    let tokens = Lexer::new(source).tokenize().map_err(CompileError::Lex)?;
    if debug.tokens {
        for token in &tokens {
            println!("{:?}", token);
        }
    }
    Ok(tokens)
}

fn parse(tokens: Vec<Token>, debug: DebugFlags) -> Result<crate::ast::Program, CompileError> {
    let (program, errors) = Parser::new(tokens).parse();
    if !errors.is_empty() {
        return Err(CompileError::Parse(errors));
    }
    if debug.ast {
        println!("{:#?}", program);
    }
    Ok(program)
}

fn analyze(program: &mut crate::ast::Program, debug: DebugFlags) -> Result<(), CompileError> {
    if debug.symbols {
        print_symbol_summary(program);
    }
    let errors = SemanticAnalyzer::new().analyze(program);
    if !errors.is_empty() {
        return Err(CompileError::Semantic(errors));
    }
    Ok(())
}

/// A debug-only listing of top-level names and signatures, reconstructed
/// from the parsed declarations — the analyzer's own symbol table doesn't
/// outlive `analyze` (it's torn down with the analyzer once analysis
/// completes), so this is a simpler source-level view rather than a dump of
/// the analyzer's internals.
fn print_symbol_summary(program: &crate::ast::Program) {
    use crate::ast::Declaration;
    println!("# Symbols");
    for declaration in &program.declarations {
        match declaration {
            Declaration::Function(function) => {
                let params: Vec<String> = function
                    .params
                    .iter()
                    .map(|p| format!("{:?} {}", p.ty, p.name))
                    .collect();
                println!(
                    "function {}({}) -> {:?}",
                    function.name,
                    params.join(", "),
                    function.return_type
                );
            }
            Declaration::Variable(global) => {
                println!("global {:?} {}", global.ty, global.name);
            }
        }
    }
}

fn executable_path_for(input: &str) -> PathBuf {
    let stem = Path::new(input)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "a.out".to_string());
    PathBuf::from(format!("{}{}", stem, std::env::consts::EXE_SUFFIX))
}
