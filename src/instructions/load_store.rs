//! # Load and Store Instructions
//!
//! This module implements register loads and stores:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected
//!
//! Loads take the page-cross cycle. Stores never read their operand and their
//! indexed forms have the extra cycle built into the base cost.

use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.fetch();
    cpu.p.set_zn(cpu.a);
    true
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.fetch();
    cpu.p.set_zn(cpu.x);
    true
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.fetch();
    cpu.p.set_zn(cpu.y);
    true
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.memory.write(cpu.abs_addr, cpu.a);
    false
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.memory.write(cpu.abs_addr, cpu.x);
    false
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.memory.write(cpu.abs_addr, cpu.y);
    false
}
