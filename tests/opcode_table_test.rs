//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table is complete and accurate.

use cpu6502::{AddressingMode, Operation, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(
        OPCODE_TABLE.len(),
        256,
        "Opcode table must have exactly 256 entries"
    );

    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(
            metadata.mnemonic.len(),
            3,
            "Opcode 0x{:02X} mnemonic must be three characters",
            opcode
        );
    }
}

#[test]
fn test_opcode_table_size_validation() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(
            metadata.size_bytes,
            1 + metadata.addressing_mode.operand_bytes(),
            "Opcode 0x{:02X} size disagrees with {:?}",
            opcode,
            metadata.addressing_mode
        );
    }
}

#[test]
fn test_documented_opcode_count() {
    let documented = OPCODE_TABLE.iter().filter(|m| m.is_documented()).count();
    assert_eq!(documented, 151);

    let mut mnemonics: Vec<&str> = OPCODE_TABLE
        .iter()
        .filter(|m| m.is_documented())
        .map(|m| m.mnemonic)
        .collect();
    mnemonics.sort_unstable();
    mnemonics.dedup();
    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_undocumented_entries() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        if metadata.operation == Operation::Xxx {
            assert_eq!(metadata.mnemonic, "???", "opcode 0x{:02X}", opcode);
            assert_eq!(metadata.addressing_mode, AddressingMode::Implied);
            assert_eq!(metadata.base_cycles, 2);
            assert_eq!(metadata.size_bytes, 1);
        }
    }
}

#[test]
fn test_spot_check_entries() {
    let cases = [
        (0x00, "BRK", AddressingMode::Implied, 7),
        (0x0A, "ASL", AddressingMode::Implied, 2),
        (0x10, "BPL", AddressingMode::Relative, 2),
        (0x20, "JSR", AddressingMode::Absolute, 6),
        (0x4C, "JMP", AddressingMode::Absolute, 3),
        (0x6C, "JMP", AddressingMode::Indirect, 5),
        (0x69, "ADC", AddressingMode::Immediate, 2),
        (0x71, "ADC", AddressingMode::IndirectY, 5),
        (0x81, "STA", AddressingMode::IndirectX, 6),
        (0x91, "STA", AddressingMode::IndirectY, 6),
        (0x96, "STX", AddressingMode::ZeroPageY, 4),
        (0xB6, "LDX", AddressingMode::ZeroPageY, 4),
        (0xBE, "LDX", AddressingMode::AbsoluteY, 4),
        (0xDE, "DEC", AddressingMode::AbsoluteX, 7),
        (0xEA, "NOP", AddressingMode::Implied, 2),
        (0xF9, "SBC", AddressingMode::AbsoluteY, 4),
    ];

    for (opcode, mnemonic, mode, cycles) in cases {
        let entry = &OPCODE_TABLE[opcode];
        assert_eq!(entry.mnemonic, mnemonic, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.addressing_mode, mode, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.base_cycles, cycles, "opcode 0x{:02X}", opcode);
    }
}
