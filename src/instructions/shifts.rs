//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator when encoded with implied addressing and on
//! memory otherwise. The bit shifted out lands in C; Z and N follow the result.

use crate::{AddressingMode, MemoryBus, Status, CPU};

/// Applies `shift` to the operand and writes the result back where it came from.
///
/// `shift` receives the operand and the incoming carry and returns the result and
/// the outgoing carry.
fn shift_in_place<M: MemoryBus>(cpu: &mut CPU<M>, shift: fn(u8, bool) -> (u8, bool)) -> bool {
    let value = cpu.fetch();
    let (result, carry) = shift(value, cpu.p.contains(Status::C));

    cpu.p.set(Status::C, carry);
    cpu.p.set_zn(result);

    if cpu.current_mode() == AddressingMode::Implied {
        cpu.a = result;
    } else {
        cpu.memory.write(cpu.abs_addr, result);
    }
    false
}

pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    shift_in_place(cpu, |value, _| (value << 1, value & 0x80 != 0))
}

pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    shift_in_place(cpu, |value, _| (value >> 1, value & 0x01 != 0))
}

pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    shift_in_place(cpu, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    shift_in_place(cpu, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
