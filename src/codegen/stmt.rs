//! Statement code generation.
//!
//! Control flow follows the label scheme §4.4 describes: each construct
//! allocates its own numbered labels (`.Lelse0`, `.Lendif0`, `.Lfor1`, ...)
//! so nested `if`/`while`/`for` never collide.

use crate::ast::{DataType, Expr, Stmt, StmtKind, VariableDecl};

use super::abi::store_suffix;
use super::Codegen;

impl Codegen {
    pub(super) fn compile_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Compound(stmts) => {
                self.frame.enter_scope();
                for stmt in stmts {
                    self.compile_stmt(stmt);
                }
                self.frame.exit_scope();
            }
            StmtKind::VariableDecl(decl) => self.compile_variable_decl(decl),
            StmtKind::If { condition, then_branch, else_branch } => {
                self.compile_if(condition, then_branch, else_branch.as_deref())
            }
            StmtKind::While { condition, body } => self.compile_while(condition, body),
            StmtKind::For { init, condition, update, body } => {
                self.compile_for(init.as_deref(), condition.as_ref(), update.as_ref(), body)
            }
            StmtKind::Return(value) => self.compile_return(value.as_ref()),
            StmtKind::ExprStmt(value) => {
                if let Some(value) = value {
                    self.compile_expr(value);
                }
            }
        }
    }

    fn compile_variable_decl(&mut self, decl: &VariableDecl) {
        let offset = self.frame.declare(&decl.name, decl.ty);
        if let Some(init) = &decl.init {
            self.compile_expr(init);
            let destination = format!("{offset}(%rbp)");
            self.emit_init_store(&destination, decl.ty);
        }
    }

    /// A freshly declared local's initializer is always stored from
    /// whichever width-appropriate portion of `%rax` its type expects —
    /// the same store `compile_assign` in `expr.rs` uses, duplicated here
    /// rather than shared because the two sites differ in where the
    /// destination and type come from (a brand-new slot vs. a lookup).
    fn emit_init_store(&mut self, destination: &str, ty: DataType) {
        let reg = match ty {
            DataType::Int => "eax",
            DataType::Char => "al",
            DataType::CharPtr => "rax",
            DataType::Void => unreachable!("codegen: a variable is never of type void"),
        };
        let suffix = store_suffix(ty);
        self.emit(format!("mov{suffix} %{reg}, {destination}"));
    }

    fn compile_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        let else_label = self.new_label("else");
        let end_label = self.new_label("endif");
        self.compile_expr(condition);
        self.emit("testq %rax, %rax");
        if else_branch.is_some() {
            self.emit(format!("jz {else_label}"));
        } else {
            self.emit(format!("jz {end_label}"));
        }
        self.compile_stmt(then_branch);
        if let Some(else_branch) = else_branch {
            self.emit(format!("jmp {end_label}"));
            self.emit_label(&else_label);
            self.compile_stmt(else_branch);
        }
        self.emit_label(&end_label);
    }

    fn compile_while(&mut self, condition: &Expr, body: &Stmt) {
        let loop_label = self.new_label("while");
        let end_label = self.new_label("endwhile");
        self.emit_label(&loop_label);
        self.compile_expr(condition);
        self.emit("testq %rax, %rax");
        self.emit(format!("jz {end_label}"));
        self.compile_stmt(body);
        self.emit(format!("jmp {loop_label}"));
        self.emit_label(&end_label);
    }

    fn compile_for(
        &mut self,
        init: Option<&Stmt>,
        condition: Option<&Expr>,
        update: Option<&Expr>,
        body: &Stmt,
    ) {
        self.frame.enter_scope();
        if let Some(init) = init {
            self.compile_stmt(init);
        }
        let loop_label = self.new_label("for");
        let update_label = self.new_label("forupdate");
        let end_label = self.new_label("endfor");
        self.emit_label(&loop_label);
        if let Some(condition) = condition {
            self.compile_expr(condition);
            self.emit("testq %rax, %rax");
            self.emit(format!("jz {end_label}"));
        }
        self.compile_stmt(body);
        self.emit_label(&update_label);
        if let Some(update) = update {
            self.compile_expr(update);
        }
        self.emit(format!("jmp {loop_label}"));
        self.emit_label(&end_label);
        self.frame.exit_scope();
    }

    fn compile_return(&mut self, value: Option<&Expr>) {
        if let Some(value) = value {
            self.compile_expr(value);
        }
        self.emit("jmp .Lreturn");
    }
}
