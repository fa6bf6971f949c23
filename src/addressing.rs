//! # Addressing Modes
//!
//! This module defines the twelve addressing modes of the 6502 and the resolvers
//! that turn operand bytes into an effective address or an operand value.
//!
//! The hi byte of an address names its page and the lo byte the offset within
//! that page. Every resolver consumes its operand bytes at PC through
//! [`MemoryBus::read`], advances PC past them, and writes exactly one of the
//! CPU's `abs_addr`, `rel_addr` or `fetched` latches. The returned `bool` is the
//! mode's half of the page-cross penalty; the instruction supplies the other half
//! (see [`CPU::clock`](crate::CPU::clock)).

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
///
/// There is no separate accumulator mode: `ASL A` and friends are encoded as
/// Implied and the shift operates on A when it sees that mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    /// No operand, or the accumulator.
    ///
    /// Examples: CLC, RTS, NOP, LSR A
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// True when `a` and `b` lie in different 256-byte pages.
#[inline]
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Runs the resolver for `mode`. Returns whether the mode may cost an extra cycle.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> bool {
        match mode {
            AddressingMode::Implied => self.imp(),
            AddressingMode::Immediate => self.imm(),
            AddressingMode::ZeroPage => self.zp0(),
            AddressingMode::ZeroPageX => self.zpx(),
            AddressingMode::ZeroPageY => self.zpy(),
            AddressingMode::Relative => self.rel(),
            AddressingMode::Absolute => self.abs(),
            AddressingMode::AbsoluteX => self.abx(),
            AddressingMode::AbsoluteY => self.aby(),
            AddressingMode::Indirect => self.ind(),
            AddressingMode::IndirectX => self.izx(),
            AddressingMode::IndirectY => self.izy(),
        }
    }

    /// Reads the byte at PC and advances PC past it.
    #[inline]
    pub(crate) fn read_pc(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC past it.
    #[inline]
    fn read_pc_word(&mut self) -> u16 {
        let lo = self.read_pc();
        let hi = self.read_pc();
        u16::from_le_bytes([lo, hi])
    }

    /// Reads a pointer stored in zero page. The high byte wraps to $00 after $FF.
    #[inline]
    fn read_zp_word(&mut self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16);
        let hi = self.memory.read(zp.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    /// Implied: nothing to consume. `abs_addr` records PC for inspection only.
    fn imp(&mut self) -> bool {
        self.abs_addr = self.pc;
        false
    }

    /// Immediate: the operand is the next program byte.
    fn imm(&mut self) -> bool {
        self.fetched = self.read_pc();
        self.operand_latched = true;
        false
    }

    /// Zero page: one byte of address, high byte is $00.
    fn zp0(&mut self) -> bool {
        self.abs_addr = self.read_pc() as u16;
        false
    }

    // The index is added without carry into the high byte, so the effective
    // address never leaves page zero and no page-cross penalty exists.
    fn zpx(&mut self) -> bool {
        self.abs_addr = self.read_pc().wrapping_add(self.x) as u16;
        false
    }

    fn zpy(&mut self) -> bool {
        self.abs_addr = self.read_pc().wrapping_add(self.y) as u16;
        false
    }

    /// Relative: signed displacement, sign-extended into `rel_addr`.
    ///
    /// The taken-branch and page-cross cycles are charged by the branch itself.
    fn rel(&mut self) -> bool {
        let offset = self.read_pc() as u16;
        self.rel_addr = if offset & 0x80 != 0 {
            offset | 0xFF00
        } else {
            offset
        };
        false
    }

    /// Absolute: full little-endian 16-bit address.
    fn abs(&mut self) -> bool {
        self.abs_addr = self.read_pc_word();
        false
    }

    fn abx(&mut self) -> bool {
        let base = self.read_pc_word();
        self.abs_addr = base.wrapping_add(self.x as u16);
        page_crossed(base, self.abs_addr)
    }

    fn aby(&mut self) -> bool {
        let base = self.read_pc_word();
        self.abs_addr = base.wrapping_add(self.y as u16);
        page_crossed(base, self.abs_addr)
    }

    /// Indirect: the operand is the address of the effective address.
    ///
    /// The NMOS part does not carry into the pointer's high byte when fetching the
    /// second byte: a pointer of $xxFF takes its high byte from $xx00, not from
    /// the first byte of the next page. `JMP ($10FF)` reads $10FF and $1000.
    fn ind(&mut self) -> bool {
        let ptr = self.read_pc_word();
        let lo = self.memory.read(ptr);
        let hi = if ptr & 0x00FF == 0x00FF {
            self.memory.read(ptr & 0xFF00)
        } else {
            self.memory.read(ptr.wrapping_add(1))
        };
        self.abs_addr = u16::from_le_bytes([lo, hi]);
        false
    }

    /// Indexed indirect: X is added to the zero page operand before dereferencing.
    fn izx(&mut self) -> bool {
        let zp = self.read_pc().wrapping_add(self.x);
        self.abs_addr = self.read_zp_word(zp);
        false
    }

    /// Indirect indexed: Y is added to the pointer fetched from zero page.
    fn izy(&mut self) -> bool {
        let zp = self.read_pc();
        let base = self.read_zp_word(zp);
        self.abs_addr = base.wrapping_add(self.y as u16);
        page_crossed(base, self.abs_addr)
    }
}
