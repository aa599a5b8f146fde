//! Per-function stack frame layout: maps parameter and local-variable names
//! to `%rbp`-relative offsets.
//!
//! Unlike the original reference implementation's flat, unscoped variable
//! table, this one mirrors [`crate::semantic::symbol`]'s scope stack, so a
//! variable shadowing an outer one of the same name (allowed by the
//! analyzer — see `redeclaring_in_a_nested_scope_is_allowed_as_shadowing`)
//! gets its own slot instead of silently colliding with it.

use std::collections::HashMap;

use crate::ast::DataType;

use super::abi::size_of;

#[derive(Clone, Copy)]
pub(super) struct Slot {
    pub(super) offset: i32,
    pub(super) ty: DataType,
}

pub(super) struct StackFrame {
    scopes: Vec<HashMap<String, Slot>>,
    next_offset: i32,
}

impl StackFrame {
    pub(super) fn new() -> Self {
        StackFrame {
            scopes: vec![HashMap::new()],
            next_offset: 0,
        }
    }

    pub(super) fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub(super) fn exit_scope(&mut self) {
        self.scopes.pop();
        debug_assert!(!self.scopes.is_empty(), "codegen: popped the function's outermost scope");
    }

    /// Allocates a new slot for `name`, rounding its size up to 8 bytes and
    /// growing the frame downward from `%rbp`, the same way the original
    /// grows `stack_size` — accumulated across the *whole* function, not
    /// just its parameter list (see [`super::Codegen::compile_function`]
    /// for why that distinction matters).
    pub(super) fn declare(&mut self, name: &str, ty: DataType) -> i32 {
        let rounded = ((size_of(ty).max(1)) + 7) / 8 * 8;
        self.next_offset -= rounded;
        let offset = self.next_offset;
        self.scopes
            .last_mut()
            .expect("a stack frame always has at least one scope")
            .insert(name.to_string(), Slot { offset, ty });
        offset
    }

    /// Looks up `name` in the nearest enclosing scope that declares it. A
    /// miss means either a global or (after a clean semantic analysis) an
    /// impossible program.
    pub(super) fn try_lookup(&self, name: &str) -> Option<Slot> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name).copied())
    }

    /// The total frame size to reserve in the prologue's `subq`, rounded up
    /// to a 16-byte boundary as the System V ABI requires at a `call`.
    pub(super) fn frame_size(&self) -> i32 {
        let used = -self.next_offset;
        (used + 15) / 16 * 16
    }
}
