//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: Push / Pull Accumulator
//! - PHP / PLP: Push / Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.push(cpu.a);
    false
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B and the unused bit set; the live register keeps
/// its B flag as it was.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let status = cpu.p.union(Status::B).union(Status::U);
    cpu.push(status.bits());
    false
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.pull();
    cpu.p.set_zn(cpu.a);
    false
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B does not exist as a latch in the register, so it is dropped; the unused
/// bit reads back as 1.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let status = cpu.pull();
    cpu.p = Status::from_bits_retain(status)
        .difference(Status::B)
        .union(Status::U);
    false
}
