//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute, or indirect with the page-wrap defect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and interrupt return
//! - NOP, and the no-op executed for undocumented opcodes
//!
//! BRK is a software interrupt that:
//! 1. Skips the padding byte after the opcode
//! 2. Pushes PC to the stack (high byte first, then low byte)
//! 3. Pushes processor status to stack with B flag set
//! 4. Sets the I (interrupt disable) flag
//! 5. Loads PC from IRQ vector at $FFFE/F

use log::debug;

use crate::cpu::IRQ_VECTOR;
use crate::{MemoryBus, Status, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already produced the target, including the indirect mode's
/// same-page high byte fetch.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.pc = cpu.abs_addr;
    false
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return point
/// minus one), then jumps. RTS adds the one back.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = cpu.abs_addr;
    false
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    false
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (B is discarded, the unused bit reads as 1), then
/// the program counter. Unlike RTS, the pulled PC is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let status = cpu.pull();
    cpu.p = Status::from_bits_retain(status)
        .difference(Status::B)
        .union(Status::U);
    cpu.pc = cpu.pull_word();
    false
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Flags affected:
/// - B: Set in the pushed status byte only, not in the live register
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    // BRK is followed by a padding byte that the return address skips
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_word(cpu.pc);

    let status = cpu.p.union(Status::B).union(Status::U);
    cpu.push(status.bits());

    cpu.p.insert(Status::I);
    cpu.pc = cpu.read_vector(IRQ_VECTOR);
    false
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) -> bool {
    false
}

/// Undocumented opcodes execute as a one-byte NOP.
pub(crate) fn execute_xxx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    debug!(
        "undocumented opcode 0x{:02X} at 0x{:04X} executed as NOP",
        cpu.opcode,
        cpu.pc.wrapping_sub(1)
    );
    false
}
