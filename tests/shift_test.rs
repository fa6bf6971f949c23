//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, program).unwrap();
    CPU::new(memory)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x81);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_lsr_accumulator_to_zero() {
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.set_a(0x01);

    cpu.step();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_rol_accumulator_uses_carry() {
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);

    cpu.step();
    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_accumulator_uses_carry() {
    let mut cpu = setup_cpu(&[0x6A]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step();
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_asl_memory_leaves_accumulator() {
    let mut cpu = setup_cpu(&[0x06, 0x10]);
    cpu.memory_mut().write(0x0010, 0x40);
    cpu.set_a(0x11);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().peek(0x0010), 0x80);
    assert_eq!(cpu.a(), 0x11);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_ror_absolute_x_fixed_cycles() {
    let mut cpu = setup_cpu(&[0x7E, 0xFF, 0x02]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x0300, 0x02);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.memory().peek(0x0300), 0x01);
    assert!(!cpu.flag_c());
}

#[test]
fn test_lsr_memory_clears_negative() {
    let mut cpu = setup_cpu(&[0x4E, 0x00, 0x02]);
    cpu.memory_mut().write(0x0200, 0xFF);
    cpu.set_flag_n(true);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().peek(0x0200), 0x7F);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}
