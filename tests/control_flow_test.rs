//! Tests for JMP, JSR/RTS, BRK/RTI and NOP.
//!
//! Tests cover:
//! - Absolute and indirect jumps, including the indirect page-wrap defect
//! - Subroutine call and return stack layout
//! - Software interrupt entry and return

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program).unwrap();
    CPU::new(memory)
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu(&[0x4C, 0x34, 0x12]);
    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu(&[0x6C, 0x00, 0x02]);
    cpu.memory_mut().write(0x0200, 0xCD);
    cpu.memory_mut().write(0x0201, 0xAB);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.pc(), 0xABCD);
}

#[test]
fn test_jmp_indirect_page_wrap_defect() {
    // Pointer at $CAFF: the high byte comes from $CA00, not $CB00
    let mut cpu = setup_cpu(&[0x6C, 0xFF, 0xCA]);
    cpu.memory_mut().write(0xCAFF, 0xEF);
    cpu.memory_mut().write(0xCA00, 0xBE);
    cpu.memory_mut().write(0xCB00, 0x12);

    cpu.step();
    assert_eq!(cpu.pc(), 0xBEEF);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_return_minus_one() {
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x90]);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    // 0x8002 pushed high byte first
    assert_eq!(cpu.memory().peek(0x01FD), 0x80);
    assert_eq!(cpu.memory().peek(0x01FC), 0x02);
}

#[test]
fn test_jsr_rts_round_trip() {
    // JSR $9000; LDA #$01 / $9000: LDX #$07; RTS
    let mut cpu = setup_cpu(&[0x20, 0x00, 0x90, 0xA9, 0x01]);
    cpu.memory_mut().load(0x9000, &[0xA2, 0x07, 0x60]).unwrap();

    cpu.step();
    cpu.step();
    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);

    cpu.step();
    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.x(), 0x07);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_enters_irq_handler() {
    let mut cpu = setup_cpu(&[0x00, 0xFF]);
    cpu.memory_mut().set_irq_vector(0x9000);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert!(!cpu.flag_b());
    assert_eq!(cpu.sp(), 0xFA);

    // Return address skips the padding byte
    assert_eq!(cpu.memory().peek(0x01FD), 0x80);
    assert_eq!(cpu.memory().peek(0x01FC), 0x02);
    // Pushed status carries B and U
    assert_eq!(cpu.memory().peek(0x01FB), 0x20 | 0x10 | 0x01);
}

#[test]
fn test_brk_rti_round_trip() {
    let mut cpu = setup_cpu(&[0x00, 0xFF, 0xA9, 0x42]);
    cpu.memory_mut().set_irq_vector(0x9000);
    cpu.memory_mut().write(0x9000, 0x40); // RTI
    cpu.set_flag_i(false);
    cpu.set_flag_v(true);

    cpu.step();
    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(!cpu.flag_i());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_b());

    cpu.step();
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_rti_ignores_pulled_break_bit() {
    let mut cpu = setup_cpu(&[0x40]);
    cpu.set_sp(0xFA);
    cpu.memory_mut().write(0x01FB, 0xFF);
    cpu.memory_mut().write(0x01FC, 0x00);
    cpu.memory_mut().write(0x01FD, 0x90);

    cpu.step();
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.status(), 0xEF);
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu(&[0xEA]);
    let before = cpu.registers();

    assert_eq!(cpu.step(), 2);
    let after = cpu.registers();
    assert_eq!(after.pc, 0x8001);
    assert_eq!(after.a, before.a);
    assert_eq!(after.p, before.p);
}
