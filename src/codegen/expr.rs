//! Expression code generation.
//!
//! Every [`Codegen::compile_expr`] call leaves its result in `%rax`; see the
//! module-level doc comment in `mod.rs` for the always-spill evaluation
//! model this relies on.

use crate::ast::{BinaryOperator, DataType, Expr, ExprKind, UnaryOperator};

use super::abi::{self, size_of, store_suffix};
use super::Codegen;

impl Codegen {
    pub(super) fn compile_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Number(n) => self.emit(format!("movq ${n}, %rax")),
            ExprKind::String(s) => {
                let label = self.intern_string(s);
                self.emit(format!("movq ${label}, %rax"));
            }
            ExprKind::Identifier(name) => self.compile_load(name),
            ExprKind::Call { callee, args } => self.compile_call(callee, args),
            ExprKind::BinaryOp { op, left, right } => self.compile_binary_op(*op, left, right),
            ExprKind::UnaryOp { op, operand } => self.compile_unary_op(*op, operand),
        }
    }

    fn compile_load(&mut self, name: &str) {
        if let Some(slot) = self.frame.try_lookup(name) {
            let source = format!("{}(%rbp)", slot.offset);
            self.emit_widening_load(&source, slot.ty);
            return;
        }
        let ty = self
            .lookup_global(name)
            .unwrap_or_else(|| unreachable!("codegen: '{name}' is neither a local nor a global after a clean semantic analysis"));
        let source = format!("{name}(%rip)");
        self.emit_widening_load(&source, ty);
    }

    /// Loads `source` into `%rax`, widening it to a full 64-bit value the
    /// way its type requires: sign-extend `int`, zero-extend `char`, and a
    /// plain 64-bit load for `char*`. A plain same-width `mov` (what the
    /// original reference emits for every type) would leave garbage in
    /// `%rax`'s upper bits above an 8- or 32-bit load, corrupting any later
    /// 64-bit arithmetic on the value — not a behavior worth preserving.
    fn emit_widening_load(&mut self, source: &str, ty: DataType) {
        match ty {
            DataType::Int => self.emit(format!("movslq {source}, %rax")),
            DataType::Char => self.emit(format!("movzbq {source}, %rax")),
            DataType::CharPtr => self.emit(format!("movq {source}, %rax")),
            DataType::Void => unreachable!("codegen: a variable is never of type void"),
        }
    }

    fn emit_store(&mut self, destination: &str, ty: DataType) {
        let reg = match ty {
            DataType::Int => "eax",
            DataType::Char => "al",
            DataType::CharPtr => "rax",
            DataType::Void => unreachable!("codegen: a variable is never of type void"),
        };
        self.emit(format!("mov{} %{reg}, {destination}", store_suffix(ty)));
    }

    fn compile_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) {
        match op {
            BinaryOperator::Assign => return self.compile_assign(left, right),
            BinaryOperator::And => return self.compile_and(left, right),
            BinaryOperator::Or => return self.compile_or(left, right),
            _ => {}
        }

        self.compile_expr(left);
        self.emit("pushq %rax");
        self.compile_expr(right);
        self.emit("movq %rax, %rcx");
        self.emit("popq %rax");

        match op {
            BinaryOperator::Add => self.emit("addq %rcx, %rax"),
            BinaryOperator::Sub => self.emit("subq %rcx, %rax"),
            BinaryOperator::Mul => self.emit("imulq %rcx, %rax"),
            BinaryOperator::Div => {
                self.emit("cqto");
                self.emit("idivq %rcx");
            }
            BinaryOperator::Mod => {
                self.emit("cqto");
                self.emit("idivq %rcx");
                self.emit("movq %rdx, %rax");
            }
            BinaryOperator::Lt => self.compile_compare("setl"),
            BinaryOperator::LtEq => self.compile_compare("setle"),
            BinaryOperator::Gt => self.compile_compare("setg"),
            BinaryOperator::GtEq => self.compile_compare("setge"),
            BinaryOperator::Eq => self.compile_compare("sete"),
            BinaryOperator::NotEq => self.compile_compare("setne"),
            BinaryOperator::Assign | BinaryOperator::And | BinaryOperator::Or => {
                unreachable!("handled above before operands were evaluated")
            }
        }
    }

    /// `%rax` and `%rcx` already hold the left and right operands; compares
    /// them, materializing a clean `0`/`1` in `%rax` via the `setCC`/
    /// `movzbq` pattern the original uses for `<` and `==` alone, extended
    /// here to the rest of the relational and equality operators (§9 Open
    /// Question #3 — codegen implements the operators the analyzer already
    /// accepts, rather than leaving them silently unhandled).
    fn compile_compare(&mut self, set: &str) {
        self.emit("cmpq %rcx, %rax");
        self.emit(format!("{set} %al"));
        self.emit("movzbq %al, %rax");
    }

    fn compile_and(&mut self, left: &Expr, right: &Expr) {
        let false_label = self.new_label("andfalse");
        let end_label = self.new_label("andend");
        self.compile_expr(left);
        self.emit("testq %rax, %rax");
        self.emit(format!("jz {false_label}"));
        self.compile_expr(right);
        self.emit("testq %rax, %rax");
        self.emit(format!("jz {false_label}"));
        self.emit("movq $1, %rax");
        self.emit(format!("jmp {end_label}"));
        self.emit_label(&false_label);
        self.emit("movq $0, %rax");
        self.emit_label(&end_label);
    }

    fn compile_or(&mut self, left: &Expr, right: &Expr) {
        let true_label = self.new_label("ortrue");
        let end_label = self.new_label("orend");
        self.compile_expr(left);
        self.emit("testq %rax, %rax");
        self.emit(format!("jnz {true_label}"));
        self.compile_expr(right);
        self.emit("testq %rax, %rax");
        self.emit(format!("jnz {true_label}"));
        self.emit("movq $0, %rax");
        self.emit(format!("jmp {end_label}"));
        self.emit_label(&true_label);
        self.emit("movq $1, %rax");
        self.emit_label(&end_label);
    }

    fn compile_assign(&mut self, left: &Expr, right: &Expr) {
        let ExprKind::Identifier(name) = &left.kind else {
            unreachable!("codegen: an assignment target is always an identifier after a clean semantic analysis");
        };
        self.compile_expr(right);
        if let Some(slot) = self.frame.try_lookup(name) {
            self.emit_store(&format!("{}(%rbp)", slot.offset), slot.ty);
            return;
        }
        let ty = self
            .lookup_global(name)
            .unwrap_or_else(|| unreachable!("codegen: assignment target '{name}' is neither a local nor a global"));
        self.emit_store(&format!("{name}(%rip)"), ty);
    }

    fn compile_unary_op(&mut self, op: UnaryOperator, operand: &Expr) {
        self.compile_expr(operand);
        match op {
            UnaryOperator::Neg => self.emit("negq %rax"),
            UnaryOperator::Plus => {}
            UnaryOperator::Not => {
                self.emit("testq %rax, %rax");
                self.emit("sete %al");
                self.emit("movzbq %al, %rax");
            }
        }
    }

    /// Evaluates each argument left to right, pushing every result so none
    /// is clobbered by evaluating the next (an argument that itself
    /// divides, for instance, clobbers `%rdx` — the register a not-yet-
    /// marshalled earlier argument might be waiting in). Once all are on
    /// the stack, pops them off in reverse into the ABI argument registers,
    /// which naturally undoes the push order. The original reference emits
    /// a bare `call name` with no argument marshalling at all (§9 Open
    /// Question #2).
    ///
    /// A call with more arguments than there are argument registers only
    /// ever reaches codegen if its callee also has that many parameters,
    /// which semantic analysis already rejects
    /// (`SemanticErrorKind::TooManyParameters`); an argument-count mismatch
    /// against a smaller, in-range signature is its own semantic error.
    fn compile_call(&mut self, callee: &str, args: &[Expr]) {
        if args.len() > abi::ARG_REGS.len() {
            unreachable!(
                "codegen: call to '{callee}' has {} arguments after a clean semantic analysis",
                args.len()
            );
        }
        for arg in args {
            self.compile_expr(arg);
            self.emit("pushq %rax");
        }
        for reg in abi::ARG_REGS[..args.len()].iter().rev() {
            self.emit(format!("popq %{}", reg.sized(8)));
        }
        self.emit(format!("call {callee}"));
    }
}
