//! End-to-end tests for the TinyC compiler (§8 "End-to-end scenarios").
//!
//! Each scenario drives the real lex → parse → semantic → codegen
//! pipeline, then assembles the result with the system C toolchain and the
//! `tinyc-runtime` staticlib (built as a workspace sibling; its path is
//! recorded at compile time by `build.rs`, the same way the teacher's own
//! integration tests located its runtime library).

use std::process::Command;

use tempfile::tempdir;
use tinyc::codegen::Codegen;
use tinyc::lexer::Lexer;
use tinyc::parser::{ParseError, Parser};
use tinyc::semantic::{SemanticAnalyzer, SemanticError};

/// Path to the tinyc-runtime staticlib, set at compile time by `build.rs`.
const TINYC_RUNTIME_PATH: &str = env!("TINYC_RUNTIME_PATH");

/// Lexes, parses, and semantically analyzes `source`, failing the test with
/// a readable message if any phase reports an error before codegen.
fn compile_to_assembly(source: &str) -> Result<String, String> {
    let tokens = Lexer::new(source).tokenize().map_err(|e| e.to_string())?;
    let (mut program, parse_errors) = Parser::new(tokens).parse();
    if !parse_errors.is_empty() {
        return Err(format!("{} parse error(s): {:?}", parse_errors.len(), parse_errors));
    }
    let semantic_errors = SemanticAnalyzer::new().analyze(&mut program);
    if !semantic_errors.is_empty() {
        return Err(format!("{} semantic error(s): {:?}", semantic_errors.len(), semantic_errors));
    }
    Ok(Codegen::compile(&program))
}

/// Returns the first parse error produced, if any, without requiring a
/// clean semantic analysis.
fn parse_errors_for(source: &str) -> Vec<ParseError> {
    let tokens = Lexer::new(source).tokenize().expect("fixture must lex");
    let (_, errors) = Parser::new(tokens).parse();
    errors
}

/// Returns the semantic errors for a source that parses cleanly.
fn semantic_errors_for(source: &str) -> Vec<SemanticError> {
    let tokens = Lexer::new(source).tokenize().expect("fixture must lex");
    let (mut program, parse_errors) = Parser::new(tokens).parse();
    assert!(parse_errors.is_empty(), "fixture must parse cleanly: {parse_errors:?}");
    SemanticAnalyzer::new().analyze(&mut program)
}

/// Assembles `source` into an executable and runs it, returning its exit
/// status. Panics (failing the test) on any compile, assemble, or link
/// failure — those are distinct from the intentional error-path tests,
/// which stop at `compile_to_assembly`/parser/semantic-error helpers above
/// and never reach this function.
fn compile_and_run(source: &str) -> i32 {
    let assembly = compile_to_assembly(source).expect("fixture must compile cleanly");

    let dir = tempdir().expect("failed to create temp dir");
    let asm_path = dir.path().join("program.s");
    let exe_path = dir.path().join("program");
    std::fs::write(&asm_path, &assembly).expect("failed to write assembly");

    let output = Command::new("cc")
        .args([
            asm_path.to_str().unwrap(),
            TINYC_RUNTIME_PATH,
            "-o",
            exe_path.to_str().unwrap(),
        ])
        .output()
        .expect("failed to invoke cc");
    assert!(
        output.status.success(),
        "cc failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let status = Command::new(&exe_path).status().expect("failed to run compiled executable");
    status.code().expect("process should exit normally, not via signal")
}

// §8 E1-E5: successful compiles, checked by exit status.

#[test]
fn e1_bare_return_literal() {
    assert_eq!(compile_and_run("int main(){return 42;}"), 42);
}

#[test]
fn e2_sum_of_two_locals() {
    assert_eq!(
        compile_and_run("int main(){int x=10;int y=20;int r=x+y;return r;}"),
        30
    );
}

#[test]
fn e3_operator_precedence_and_parentheses() {
    assert_eq!(
        compile_and_run("int main(){int a=10;int b=3;int r=(a+b)*2-1;return r;}"),
        25
    );
}

#[test]
fn e4_if_else_branch() {
    assert_eq!(
        compile_and_run("int main(){int x=5;if(x<10){return 1;}else{return 0;}}"),
        1
    );
}

#[test]
fn e5_while_loop_accumulator() {
    assert_eq!(
        compile_and_run("int main(){int i=0;int s=0;while(i<5){s=s+i;i=i+1;}return s;}"),
        10
    );
}

// §8 E6-E8: error paths. None of these reach codegen.

#[test]
fn e6_undefined_identifier_is_a_semantic_error() {
    let errors = semantic_errors_for("int main(){return undeclared_var;}");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "Undefined identifier 'undeclared_var'");
}

#[test]
fn e7_assigning_a_string_to_an_int_is_a_type_mismatch() {
    let errors = semantic_errors_for(r#"int main(){int x;x="hello";return x;}"#);
    assert!(!errors.is_empty(), "expected at least one semantic error");
    assert!(
        errors.iter().any(|e| e.message().contains("Type mismatch")),
        "expected a type mismatch error, got: {errors:?}"
    );
}

#[test]
fn e8_unterminated_statement_is_a_parse_error() {
    let errors = parse_errors_for("int main(){return 42");
    assert!(!errors.is_empty(), "expected at least one parse error");
}

// A few additional end-to-end scenarios beyond the seed table, exercising
// functions, recursion via loops, and the runtime's string/char paths.

#[test]
fn function_call_with_parameters_returns_their_sum() {
    assert_eq!(
        compile_and_run("int add(int a, int b){return a+b;}\nint main(){return add(3, 4);}"),
        7
    );
}

#[test]
fn for_loop_counts_down_to_zero() {
    let source = r#"
        int main() {
            int total = 0;
            for (int i = 1; i <= 4; i = i + 1) {
                total = total + i;
            }
            return total;
        }
    "#;
    assert_eq!(compile_and_run(source), 10);
}

#[test]
fn global_variable_is_visible_inside_main() {
    assert_eq!(compile_and_run("int counter = 7;\nint main(){return counter;}"), 7);
}

#[test]
fn logical_operators_short_circuit_to_the_expected_result() {
    assert_eq!(compile_and_run("int main(){return (1 && 0) + (1 || 0);}"), 1);
}
