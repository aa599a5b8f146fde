//! The TinyC compiler CLI (§6).

use clap::Parser;

mod diagnostics;
mod driver;

/// Command-line interface for the TinyC compiler.
#[derive(Parser)]
#[command(name = "tinyc")]
#[command(about = "An ahead-of-time compiler for TinyC, emitting x86-64 assembly", long_about = None)]
struct Cli {
    /// The source file to compile.
    input: String,

    /// Output path for the generated assembly.
    #[arg(short = 'o', long = "output", default_value = "out.s")]
    output: String,

    /// Print every token the lexer produces.
    #[arg(long = "debug-tokens")]
    debug_tokens: bool,

    /// Print the parsed AST.
    #[arg(long = "debug-ast")]
    debug_ast: bool,

    /// Print a summary of top-level functions and globals before analysis.
    #[arg(long = "debug-symbols")]
    debug_symbols: bool,

    /// Stop after writing assembly; don't assemble/link an executable.
    #[arg(long = "compile-only")]
    compile_only: bool,
}

/// Entry point for the TinyC compiler.
fn main() {
    let cli = Cli::parse();

    let options = driver::Options {
        input: &cli.input,
        output: &cli.output,
        compile_only: cli.compile_only,
        debug: driver::DebugFlags {
            tokens: cli.debug_tokens,
            ast: cli.debug_ast,
            symbols: cli.debug_symbols,
        },
    };

    if let Err(error) = driver::compile(&options) {
        report_and_exit(error);
    }
}

fn report_and_exit(error: driver::CompileError) -> ! {
    match error {
        driver::CompileError::Parse(errors) => diagnostics::report_parse_errors(&errors),
        driver::CompileError::Semantic(errors) => diagnostics::report_semantic_errors(&errors),
        other => eprintln!("Error: {}", other),
    }
    std::process::exit(1);
}
