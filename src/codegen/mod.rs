//! x86-64 AT&T-syntax assembly code generation for TinyC (§4.4).
//!
//! Codegen runs only after a clean semantic analysis, against an AST the
//! analyzer has already typed and validated; per §7 ("Codegen has no error
//! path — it is entered only after a clean semantic analysis"), it has no
//! `Result` return and no public error type. A handful of `unreachable!`s
//! mark states a well-typed AST should structurally preclude.
//!
//! # Evaluation model
//!
//! Every expression leaves its result in `%rax`. A binary operator's left
//! operand is computed into `%rax`, spilled with `pushq` while the right
//! operand is computed (also into `%rax`, then moved to `%rcx`), and
//! restored with `popq` before the two are combined. This is the "naive
//! always-spill scheme" §9's register-allocator note offers as the
//! alternative to the original's register-pool-with-silent-`%rax`-reuse bug
//! (`examples/original_source/src/codegen.c`'s `codegen_allocate_register`):
//! correctness doesn't depend on counting live registers, only on the
//! stack-discipline nesting of `compile_expr` calls, which post-order
//! expression evaluation already guarantees.
//!
//! # Function frames
//!
//! A function's body is generated into a scratch buffer *before* its
//! prologue is written, so the final frame size (parameters *and* every
//! local declared anywhere in the body) is known before the `subq` that
//! reserves it. The original reference computes `stack_size` from
//! parameters alone and emits `subq` before walking the body — any local
//! declared inside grows the frame after the space for it was already
//! reserved. Buffering the body text fixes that ordering bug without
//! changing the frame's shape (`pushq %rbp` / `movq %rsp, %rbp` / `subq` /
//! body / `.Lreturn:` / epilogue).
//!
//! Incoming integer-class arguments (TinyC has no other kind) are copied
//! from `%rdi, %rsi, %rdx, %rcx, %r8, %r9` into each parameter's stack slot
//! at function entry, and a call site marshals up to six arguments through
//! the same registers before `call` — §9 Open Questions #1 and #2,
//! resolved in favor of a real (if 6-argument-capped) System V calling
//! convention rather than the original's bare `call name` with no argument
//! marshalling at all.

mod abi;
mod expr;
mod frame;
mod stmt;


use std::fmt::Write as _;

use crate::ast::{Declaration, DataType, FunctionDecl, Program};

use abi::{size_of, store_suffix};
use frame::StackFrame;

/// A global variable's constant-foldable initializer, if any. Only a bare
/// number or string literal can be resolved without running code before
/// `main`; anything else falls back to a zero-initialized slot.
enum GlobalInit {
    None,
    Number(i64),
    StringLabel(String),
}

/// Generates x86-64 AT&T assembly for a fully analyzed [`Program`].
pub struct Codegen {
    /// Finished `.text` content: every function generated so far.
    text: String,
    /// Scratch buffer for whichever function body is currently being
    /// generated; emptied into `text` once its frame size is known.
    buf: String,
    /// Interned string literals, in first-use order: `(raw lexeme, label)`.
    strings: Vec<(String, String)>,
    /// Global variables declared at the top level, in source order.
    globals: Vec<(String, DataType, GlobalInit)>,
    label_counter: usize,
    frame: StackFrame,
}

impl Codegen {
    fn new() -> Self {
        Codegen {
            text: String::new(),
            buf: String::new(),
            strings: Vec::new(),
            globals: Vec::new(),
            label_counter: 0,
            frame: StackFrame::new(),
        }
    }

    /// Generates the full assembly text for `program`: a `.data` section
    /// (interned strings and global variables) followed by `.text`.
    pub fn compile(program: &Program) -> String {
        let mut codegen = Codegen::new();
        codegen.collect_globals(program);
        for declaration in &program.declarations {
            if let Declaration::Function(function) = declaration {
                if function.body.is_some() {
                    codegen.compile_function(function);
                }
            }
        }
        codegen.finish()
    }

    fn collect_globals(&mut self, program: &Program) {
        for declaration in &program.declarations {
            let Declaration::Variable(global) = declaration else {
                continue;
            };
            let init = match global.init.as_ref().map(|expr| &expr.kind) {
                Some(crate::ast::ExprKind::Number(n)) => GlobalInit::Number(*n),
                Some(crate::ast::ExprKind::String(s)) => GlobalInit::StringLabel(self.intern_string(s)),
                _ => GlobalInit::None,
            };
            self.globals.push((global.name.clone(), global.ty, init));
        }
    }

    /// The type of a top-level global named `name`, if one was declared.
    pub(super) fn lookup_global(&self, name: &str) -> Option<DataType> {
        self.globals.iter().find(|(n, ..)| n == name).map(|(_, ty, _)| *ty)
    }

    fn compile_function(&mut self, function: &FunctionDecl) {
        self.frame = StackFrame::new();
        debug_assert!(self.buf.is_empty());

        for (index, param) in function.params.iter().enumerate() {
            let offset = self.frame.declare(&param.name, param.ty);
            self.emit_param_store(index, offset, param.ty);
        }

        let body = function
            .body
            .as_ref()
            .expect("compile_function is only called on a definition, never a prototype");
        for stmt in body {
            self.compile_stmt(stmt);
        }

        self.emit_label(".Lreturn");
        if function.return_type == DataType::Void {
            self.emit("movq $0, %rax");
        }
        self.emit("movq %rbp, %rsp");
        self.emit("popq %rbp");
        self.emit("ret");

        let generated_body = std::mem::take(&mut self.buf);
        if function.name == "main" {
            self.text.push_str(".global main\n");
        }
        writeln!(self.text, "{}:", function.name).unwrap();
        self.text.push_str("    pushq %rbp\n    movq %rsp, %rbp\n");
        let frame_size = self.frame.frame_size();
        if frame_size > 0 {
            writeln!(self.text, "    subq ${frame_size}, %rsp").unwrap();
        }
        self.text.push_str(&generated_body);
        self.text.push('\n');
    }

    /// Emits the store that copies parameter `index`'s incoming ABI
    /// register into its stack slot. A function with more parameters than
    /// there are argument registers is rejected during semantic analysis
    /// (`SemanticErrorKind::TooManyParameters`), so `index` is always in
    /// range here.
    fn emit_param_store(&mut self, index: usize, offset: i32, ty: DataType) {
        let Some(param_reg) = abi::ARG_REGS.get(index) else {
            unreachable!(
                "codegen: parameter {index} has no argument register after a clean semantic analysis"
            )
        };
        let reg = param_reg.sized(size_of(ty).max(1));
        self.emit(format!("mov{} %{reg}, {offset}(%rbp)", store_suffix(ty)));
    }

    fn finish(self) -> String {
        let mut out = String::new();
        out.push_str("# Generated by TinyC Compiler\n");
        out.push_str(".data\n");
        self.emit_globals(&mut out);
        for (value, label) in &self.strings {
            writeln!(out, "{label}:").unwrap();
            writeln!(out, "    .string \"{value}\"").unwrap();
        }
        out.push_str(".text\n");
        out.push_str(&self.text);
        out
    }

    /// §4.4 only specifies `.data` for string literals; top-level variables
    /// are accepted by the parser and analyzer
    /// (`global_variable_with_matching_initializer_is_clean`) but never
    /// mentioned in the codegen section at all. Rather than silently drop
    /// them, each gets a `.data` entry sized per its type.
    fn emit_globals(&self, out: &mut String) {
        for (name, ty, init) in &self.globals {
            writeln!(out, "{name}:").unwrap();
            match init {
                GlobalInit::Number(n) => match ty {
                    DataType::Int => writeln!(out, "    .long {n}").unwrap(),
                    DataType::Char => writeln!(out, "    .byte {n}").unwrap(),
                    DataType::CharPtr | DataType::Void => {
                        unreachable!("codegen: a number only type-checks as a global initializer for int or char")
                    }
                },
                GlobalInit::StringLabel(label) => writeln!(out, "    .quad {label}").unwrap(),
                GlobalInit::None => writeln!(out, "    .zero {}", size_of(*ty).max(1)).unwrap(),
            }
        }
    }

    fn new_label(&mut self, prefix: &str) -> String {
        let label = format!(".L{prefix}{}", self.label_counter);
        self.label_counter += 1;
        label
    }

    fn intern_string(&mut self, value: &str) -> String {
        if let Some((_, label)) = self.strings.iter().find(|(existing, _)| existing == value) {
            return label.clone();
        }
        let label = format!(".LC{}", self.strings.len());
        self.strings.push((value.to_string(), label.clone()));
        label
    }

    fn emit(&mut self, line: impl AsRef<str>) {
        self.buf.push_str("    ");
        self.buf.push_str(line.as_ref());
        self.buf.push('\n');
    }

    fn emit_label(&mut self, label: &str) {
        self.buf.push_str(label);
        self.buf.push_str(":\n");
    }
}
