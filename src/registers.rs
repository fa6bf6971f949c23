//! Copyable snapshot of the programmer-visible register file.

use crate::Status;

/// Programmer-visible 6502 registers at an instruction boundary.
///
/// Obtained from [`CPU::registers`](crate::CPU::registers). The snapshot is a
/// plain value: comparing two of them is how tests and debuggers check for
/// bit-exact state, including the always-set unused status bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (stack lives at $0100-$01FF).
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status.
    pub p: Status,
}

impl Registers {
    /// Full stack address the next push will write to.
    pub const fn stack_addr(&self) -> u16 {
        0x0100 | self.sp as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            p: Status::POWER_ON,
        }
    }
}
