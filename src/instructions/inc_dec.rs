//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Increment / Decrement Memory (read-modify-write)
//! - INX / INY: Increment X / Y
//! - DEX / DEY: Decrement X / Y
//!
//! All of them wrap modulo 256 and update Z and N only. The memory forms never
//! take the page-cross cycle; their base cost already includes it.

use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch().wrapping_add(1);
    cpu.memory.write(cpu.abs_addr, result);
    cpu.p.set_zn(result);
    false
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch().wrapping_sub(1);
    cpu.memory.write(cpu.abs_addr, result);
    cpu.p.set_zn(result);
    false
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_zn(cpu.x);
    false
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_zn(cpu.y);
    false
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_zn(cpu.x);
    false
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_zn(cpu.y);
    false
}
