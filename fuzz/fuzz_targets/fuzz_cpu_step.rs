//! Fuzz target for clock-driven CPU execution.
//!
//! This target creates arbitrary CPU states and memory contents, optionally
//! raises interrupts, then pulses the clock through a handful of instructions
//! checking the engine's invariants along the way.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{disassembler, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte; the unused bit is forced on by the first dispatch
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions worth)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    raise_irq: bool,
    raise_nmi: bool,
    /// Number of instructions to run (capped)
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.set_irq_vector(0x9000);
    memory.set_nmi_vector(0xA000);

    let _ = memory.load(0x8000, &input.memory.program);
    let _ = memory.load(0x0000, &input.memory.zero_page);
    let _ = memory.load(0x0100, &input.memory.stack_page);
    let _ = memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    if input.raise_irq {
        cpu.irq();
    }
    if input.raise_nmi {
        cpu.nmi();
    }

    for _ in 0..(input.steps % 16) {
        let pc = cpu.pc();
        let opcode = cpu.memory().peek(pc);
        let entry = OPCODE_TABLE[opcode as usize];
        let decoded = disassembler::decode(cpu.memory(), pc);

        let pulses = cpu.step();

        // An instruction costs its base cycles plus at most two (branch taken
        // across a page); interrupt entry costs exactly seven
        let base = entry.base_cycles as u64;
        assert!(pulses == 7 || (base..=base + 2).contains(&pulses));
        assert!(cpu.complete());
        assert_eq!(cpu.status() & 0x20, 0x20);
        assert_eq!(decoded.size_bytes(), entry.size_bytes);
    }
});
