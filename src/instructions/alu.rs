//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! Decimal mode is not emulated: the D flag has no effect on ADC or SBC.

use crate::{MemoryBus, Status, CPU};

/// Adds `operand` and the carry flag to the accumulator.
///
/// The sum is formed in 16 bits so the carry out of bit 7 is visible. Overflow
/// is set when both inputs share a sign and the result does not:
///
/// ```text
/// A  M  R | V  (A^R) & !(A^M)
/// 0  0  0 | 0  0
/// 0  0  1 | 1  1
/// 0  1  0 | 0  0
/// 0  1  1 | 0  0
/// 1  0  0 | 0  0
/// 1  0  1 | 0  0
/// 1  1  0 | 1  1
/// 1  1  1 | 0  0
/// ```
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, operand: u8) {
    let a = cpu.a as u16;
    let m = operand as u16;
    let carry_in = cpu.p.contains(Status::C) as u16;

    let result = a + m + carry_in;
    let overflow = ((a ^ result) & !(a ^ m) & 0x0080) != 0;

    cpu.p.set(Status::C, result > 0x00FF);
    cpu.p.set(Status::V, overflow);
    cpu.a = result as u8;
    cpu.p.set_zn(cpu.a);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A + M + C -> A. Updates C, Z, V and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    add_with_carry(cpu, value);
    true
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// There is no borrow flag: borrow is the complement of carry. With the carry
/// set, nothing extra is subtracted.
///
/// ```text
/// A = A - M - B
/// A = A - M - (1 - C) + 256     adding 256 leaves the low byte unchanged
/// A = A + (255 - M) + C
/// A = A + (M ^ 0xFF) + C        255 - M flips every bit of M
/// ```
///
/// So SBC is ADC of the complemented operand, with identical flag rules.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    add_with_carry(cpu, value ^ 0xFF);
    true
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    cpu.a &= value;
    cpu.p.set_zn(cpu.a);
    true
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    cpu.a |= value;
    cpu.p.set_zn(cpu.a);
    true
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    cpu.a ^= value;
    cpu.p.set_zn(cpu.a);
    true
}

/// Compares `register` with the operand as an unsigned subtraction.
///
/// C is set when register >= operand, Z when they are equal, N from bit 7 of the
/// difference. The register is not modified.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8) {
    let value = cpu.fetch();
    cpu.p.set(Status::C, register >= value);
    cpu.p.set_zn(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.a;
    compare(cpu, register);
    true
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.x;
    compare(cpu, register);
    false
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.y;
    compare(cpu, register);
    false
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M. A is
/// unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    cpu.p.set(Status::Z, cpu.a & value == 0);
    cpu.p.set(Status::N, value & 0x80 != 0);
    cpu.p.set(Status::V, value & 0x40 != 0);
    false
}
