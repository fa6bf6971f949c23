//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Clear / Set Carry Flag
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD / SED: Clear / Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles. SED
//! stores the D flag but the ALU never consults it.

use crate::{MemoryBus, Status, CPU};

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.p.remove(Status::C);
    false
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.p.insert(Status::C);
    false
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.p.remove(Status::I);
    false
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.p.insert(Status::I);
    false
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.p.remove(Status::V);
    false
}

pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.p.remove(Status::D);
    false
}

pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.p.insert(Status::D);
    false
}
