//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY, TXA, TYA: Transfers between A and the index registers
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! Every transfer updates Z and N from the copied value except TXS, which
//! leaves the flags alone.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.a;
    cpu.p.set_zn(cpu.x);
    false
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.a;
    cpu.p.set_zn(cpu.y);
    false
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.x;
    cpu.p.set_zn(cpu.a);
    false
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.y;
    cpu.p.set_zn(cpu.a);
    false
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.sp;
    cpu.p.set_zn(cpu.x);
    false
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction. No flags affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.sp = cpu.x;
    false
}
