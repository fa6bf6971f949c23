//! Tests for hardware interrupt handling.
//!
//! Tests cover:
//! - IRQ requests taken at instruction boundaries
//! - IRQ masking by the I flag
//! - NMI priority and non-maskability
//! - Level-triggered IRQ reported by the bus
//! - Stack contents pushed on interrupt entry

use cpu6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.set_irq_vector(0x9000);
    memory.set_nmi_vector(0xA000);
    memory.load(0x8000, program).unwrap();
    CPU::new(memory)
}

#[test]
fn test_irq_taken_at_boundary() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA]);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    cpu.clock(); // NOP in flight
    cpu.irq();
    cpu.clock(); // still finishing NOP
    assert_eq!(cpu.pc(), 0x8001);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());

    assert_eq!(cpu.memory().peek(0x01FD), 0x80);
    assert_eq!(cpu.memory().peek(0x01FC), 0x01);
    // B clear, U set, C preserved
    assert_eq!(cpu.memory().peek(0x01FB), 0x21);
}

#[test]
fn test_irq_masked_by_interrupt_disable() {
    let mut cpu = setup_cpu(&[0xEA, 0xEA]);
    assert!(cpu.flag_i());

    cpu.irq();
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);

    // The masked request is dropped, not deferred
    cpu.set_flag_i(false);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.nmi();

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xFA);
}

#[test]
fn test_nmi_wins_over_irq() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_flag_i(false);
    cpu.irq();
    cpu.nmi();

    cpu.step();
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_irq_line_from_bus() {
    // CLI; NOP
    let mut cpu = setup_cpu(&[0x58, 0xEA]);
    cpu.memory_mut().write(0x9000, 0x40); // RTI
    cpu.memory_mut().set_irq_line(true);

    cpu.step();
    assert_eq!(cpu.pc(), 0x8001);

    cpu.step();
    assert_eq!(cpu.pc(), 0x9000);

    // Line released inside the handler; RTI returns to the NOP
    cpu.memory_mut().set_irq_line(false);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.flag_i());

    cpu.step();
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_reset_drops_pending_interrupts() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.nmi();
    cpu.reset();

    cpu.step(); // reset sequence
    cpu.step();
    assert_eq!(cpu.pc(), 0x8001);
}
