//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry Clear / Set
//! - BNE / BEQ: Branch on Zero Clear / Set
//! - BPL / BMI: Branch on Negative Clear / Set
//! - BVC / BVS: Branch on Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! already sign-extended into `rel_addr` by the resolver. Cycle timing varies
//! based on whether the branch is taken and whether a page boundary is crossed:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! These cycles are charged directly, not through the page-cross AND rule.

use crate::addressing::page_crossed;
use crate::{MemoryBus, Status, CPU};

fn branch<M: MemoryBus>(cpu: &mut CPU<M>, taken: bool) -> bool {
    if taken {
        // PC already points past the operand, which is what the offset is relative to
        let target = cpu.pc.wrapping_add(cpu.rel_addr);

        cpu.remaining_cycles += 1;
        if page_crossed(cpu.pc, target) {
            cpu.remaining_cycles += 1;
        }

        cpu.abs_addr = target;
        cpu.pc = target;
    }
    false
}

pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = !cpu.p.contains(Status::C);
    branch(cpu, taken)
}

pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = cpu.p.contains(Status::C);
    branch(cpu, taken)
}

pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = !cpu.p.contains(Status::Z);
    branch(cpu, taken)
}

pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = cpu.p.contains(Status::Z);
    branch(cpu, taken)
}

pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = !cpu.p.contains(Status::N);
    branch(cpu, taken)
}

pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = cpu.p.contains(Status::N);
    branch(cpu, taken)
}

pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = !cpu.p.contains(Status::V);
    branch(cpu, taken)
}

pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let taken = cpu.p.contains(Status::V);
    branch(cpu, taken)
}
