//! Sizing, mnemonic suffixes, and System V argument-register helpers shared
//! by [`super::frame`], [`super::expr`], and [`super::stmt`].

use crate::ast::DataType;

/// Size in bytes of a value of `ty`, per §4.4's size table.
pub(super) fn size_of(ty: DataType) -> i32 {
    match ty {
        DataType::Int => 4,
        DataType::Char => 1,
        DataType::Void => 0,
        DataType::CharPtr => 8,
    }
}

/// The `mov` suffix for a store of a value of `ty` already sitting in the
/// correspondingly-sized portion of `%rax` (`l`/`b`/`q`).
pub(super) fn store_suffix(ty: DataType) -> &'static str {
    match ty {
        DataType::Int => "l",
        DataType::Char => "b",
        DataType::CharPtr => "q",
        DataType::Void => unreachable!("codegen: a value of type void is never stored"),
    }
}

/// One of the six registers the System V ABI uses to pass integer-class
/// arguments, in order.
#[derive(Clone, Copy)]
pub(super) enum ArgReg {
    Rdi,
    Rsi,
    Rdx,
    Rcx,
    R8,
    R9,
}

/// Registers, in argument-passing order. TinyC has no floating-point type,
/// so every parameter is integer-class and this table is exhaustive — there
/// is no parallel XMM table to maintain.
pub(super) const ARG_REGS: [ArgReg; 6] =
    [ArgReg::Rdi, ArgReg::Rsi, ArgReg::Rdx, ArgReg::Rcx, ArgReg::R8, ArgReg::R9];

impl ArgReg {
    /// This register's name at the given width (8, 4, or 1 bytes).
    pub(super) fn sized(self, width: i32) -> &'static str {
        use ArgReg::*;
        match (self, width) {
            (Rdi, 8) => "rdi",
            (Rdi, 4) => "edi",
            (Rdi, 1) => "dil",
            (Rsi, 8) => "rsi",
            (Rsi, 4) => "esi",
            (Rsi, 1) => "sil",
            (Rdx, 8) => "rdx",
            (Rdx, 4) => "edx",
            (Rdx, 1) => "dl",
            (Rcx, 8) => "rcx",
            (Rcx, 4) => "ecx",
            (Rcx, 1) => "cl",
            (R8, 8) => "r8",
            (R8, 4) => "r8d",
            (R8, 1) => "r8b",
            (R9, 8) => "r9",
            (R9, 4) => "r9d",
            (R9, 1) => "r9b",
            _ => unreachable!("codegen: unsupported register width {width}"),
        }
    }
}
