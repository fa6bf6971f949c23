//! Tests for load, store, increment/decrement and transfer instructions.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program).unwrap();
    CPU::new(memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_flags() {
    let mut cpu = setup_cpu(&[0xA9, 0x00, 0xA9, 0x80, 0xA9, 0x01]);

    cpu.step();
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());

    cpu.step();
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_ldx_zero_page_y_wraps_in_zero_page() {
    let mut cpu = setup_cpu(&[0xB6, 0xF0]);
    cpu.set_y(0x20);
    cpu.memory_mut().write(0x0010, 0x5A);
    cpu.memory_mut().write(0x0110, 0xFF);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.x(), 0x5A);
}

#[test]
fn test_ldy_absolute_x_page_cross() {
    let mut cpu = setup_cpu(&[0xBC, 0x80, 0x20]);
    cpu.set_x(0x80);
    cpu.memory_mut().write(0x2100, 0x07);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.y(), 0x07);
}

#[test]
fn test_lda_indexed_indirect_pointer_wraps() {
    // ($FE,X) with X=1 reads the pointer from $FF/$00
    let mut cpu = setup_cpu(&[0xA1, 0xFE]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x00FF, 0x34);
    cpu.memory_mut().write(0x0000, 0x12);
    cpu.memory_mut().write(0x1234, 0xAB);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.a(), 0xAB);
}

// ========== Stores ==========

#[test]
fn test_stores_leave_flags_alone() {
    // STA $10; STX $11; STY $12
    let mut cpu = setup_cpu(&[0x85, 0x10, 0x86, 0x11, 0x84, 0x12]);
    cpu.set_a(0x00);
    cpu.set_x(0x80);
    cpu.set_y(0x01);
    let before = cpu.status();

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.step(), 3);

    assert_eq!(cpu.memory().peek(0x0010), 0x00);
    assert_eq!(cpu.memory().peek(0x0011), 0x80);
    assert_eq!(cpu.memory().peek(0x0012), 0x01);
    assert_eq!(cpu.status(), before);
}

#[test]
fn test_sta_indirect_indexed_always_six_cycles() {
    let mut cpu = setup_cpu(&[0x91, 0x20]);
    cpu.set_y(0x01);
    cpu.set_a(0x99);
    cpu.memory_mut().write(0x0020, 0xFF);
    cpu.memory_mut().write(0x0021, 0x30);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().peek(0x3100), 0x99);
}

// ========== Increment / Decrement ==========

#[test]
fn test_inc_memory_wraps_to_zero() {
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().peek(0x0010), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_dec_memory_goes_negative() {
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x03]);
    cpu.memory_mut().write(0x0300, 0x00);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().peek(0x0300), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_index_increments_and_decrements() {
    // INX; INY; DEX; DEY
    let mut cpu = setup_cpu(&[0xE8, 0xC8, 0xCA, 0x88]);
    cpu.set_x(0xFF);
    cpu.set_y(0x7F);

    cpu.step();
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.x(), 0xFF);

    cpu.step();
    assert_eq!(cpu.y(), 0x7F);
    assert!(!cpu.flag_n());
}

// ========== Transfers ==========

#[test]
fn test_register_transfers_set_flags() {
    // TAX; TAY; TXA; TYA
    let mut cpu = setup_cpu(&[0xAA, 0xA8, 0x8A, 0x98]);
    cpu.set_a(0x80);

    cpu.step();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());

    cpu.step();
    assert_eq!(cpu.y(), 0x80);

    cpu.set_x(0x00);
    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_sets_flags_txs_does_not() {
    // TSX; TXS
    let mut cpu = setup_cpu(&[0xBA, 0x9A]);

    cpu.step();
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());

    cpu.set_x(0x00);
    cpu.set_flag_z(false);
    cpu.step();
    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
}
