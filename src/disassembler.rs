//! 6502 Disassembler
//!
//! Decodes instructions straight from a [`MemoryBus`] using the same opcode table
//! the CPU executes from. All reads go through [`MemoryBus::peek`], so
//! disassembling memory-mapped I/O never disturbs a device.

use std::fmt;

use crate::{AddressingMode, MemoryBus, OpcodeMetadata, OPCODE_TABLE};

/// A single decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Table entry for the opcode
    pub metadata: OpcodeMetadata,

    /// Operand bytes as a little-endian value (0 when the mode has none)
    pub operand: u16,
}

impl Instruction {
    /// Total size in bytes (opcode + operands).
    pub fn size_bytes(&self) -> u8 {
        self.metadata.size_bytes
    }

    /// Address of the instruction that follows this one.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.metadata.size_bytes as u16)
    }
}

/// Formats as assembler text: `LDA #$42`, `STA $0200,X`, `JMP ($FFFC)`.
///
/// Branch operands are shown as their target address. Undocumented opcodes are
/// shown as a `.byte` directive.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.metadata.is_documented() {
            return write!(f, ".byte ${:02X}", self.opcode);
        }

        let mnemonic = self.metadata.mnemonic;
        let zp = self.operand as u8;
        let abs = self.operand;

        match self.metadata.addressing_mode {
            AddressingMode::Implied => match mnemonic {
                "ASL" | "LSR" | "ROL" | "ROR" => write!(f, "{} A", mnemonic),
                _ => write!(f, "{}", mnemonic),
            },
            AddressingMode::Immediate => write!(f, "{} #${:02X}", mnemonic, zp),
            AddressingMode::ZeroPage => write!(f, "{} ${:02X}", mnemonic, zp),
            AddressingMode::ZeroPageX => write!(f, "{} ${:02X},X", mnemonic, zp),
            AddressingMode::ZeroPageY => write!(f, "{} ${:02X},Y", mnemonic, zp),
            AddressingMode::Relative => {
                let target = self.next_address().wrapping_add_signed(zp as i8 as i16);
                write!(f, "{} ${:04X}", mnemonic, target)
            }
            AddressingMode::Absolute => write!(f, "{} ${:04X}", mnemonic, abs),
            AddressingMode::AbsoluteX => write!(f, "{} ${:04X},X", mnemonic, abs),
            AddressingMode::AbsoluteY => write!(f, "{} ${:04X},Y", mnemonic, abs),
            AddressingMode::Indirect => write!(f, "{} (${:04X})", mnemonic, abs),
            AddressingMode::IndirectX => write!(f, "{} (${:02X},X)", mnemonic, zp),
            AddressingMode::IndirectY => write!(f, "{} (${:02X}),Y", mnemonic, zp),
        }
    }
}

/// Decodes the instruction at `address`.
///
/// Operand bytes wrap around the top of the address space.
///
/// # Examples
///
/// ```
/// use cpu6502::{disassembler, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x8000, &[0x6C, 0xFC, 0xFF]).unwrap();
///
/// let instr = disassembler::decode(&mem, 0x8000);
/// assert_eq!(instr.to_string(), "JMP ($FFFC)");
/// assert_eq!(instr.next_address(), 0x8003);
/// ```
pub fn decode<M: MemoryBus + ?Sized>(bus: &M, address: u16) -> Instruction {
    let opcode = bus.peek(address);
    let metadata = OPCODE_TABLE[opcode as usize];

    let operand = match metadata.addressing_mode.operand_bytes() {
        0 => 0,
        1 => bus.peek(address.wrapping_add(1)) as u16,
        _ => u16::from_le_bytes([
            bus.peek(address.wrapping_add(1)),
            bus.peek(address.wrapping_add(2)),
        ]),
    };

    Instruction {
        address,
        opcode,
        metadata,
        operand,
    }
}

/// Decodes consecutive instructions starting at `start` until `end` (inclusive)
/// is reached or passed.
///
/// Decoding stops rather than wrapping if an instruction runs past 0xFFFF.
pub fn disassemble<M: MemoryBus + ?Sized>(bus: &M, start: u16, end: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut address = start as u32;

    while address <= end as u32 {
        let instr = decode(bus, address as u16);
        address += instr.size_bytes() as u32;
        instructions.push(instr);
    }

    instructions
}
