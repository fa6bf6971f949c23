//! Simple RAM example
//!
//! Demonstrates basic CPU initialization and execution with FlatMemory.
//!
//! This example shows:
//! - Creating a 64KB flat memory instance and loading a program image
//! - Listing the program with the disassembler
//! - Executing instructions one at a time and inspecting state
//! - Instruction tracing through the `log` facade
//!
//! Run with `RUST_LOG=trace` to see every dispatched instruction.

use cpu6502::{disassembler, FlatMemory, MemoryBus, MemoryError, CPU};

/// Sums the bytes 1..=10 into $0200, then halts in a tight loop.
const PROGRAM: &[u8] = &[
    0xA2, 0x0A, //       LDX #$0A
    0xA9, 0x00, //       LDA #$00
    0x18, //       loop: CLC
    0x86, 0x10, //       STX $10
    0x65, 0x10, //       ADC $10
    0xCA, //             DEX
    0xD0, 0xF8, //       BNE loop
    0x8D, 0x00, 0x02, // STA $0200
    0x4C, 0x0F, 0x80, // halt: JMP halt
];

fn main() -> Result<(), MemoryError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("6502 CPU - Simple RAM Example");
    println!("=============================\n");

    let mut memory = FlatMemory::new();
    memory.set_reset_vector(0x8000);
    memory.load(0x8000, PROGRAM)?;

    println!("Program:");
    let end = 0x8000 + PROGRAM.len() as u16 - 1;
    for instr in disassembler::disassemble(&memory, 0x8000, end) {
        println!("  {:04X}  {}", instr.address, instr);
    }
    println!();

    let mut cpu = CPU::new(memory);
    print_state(&cpu);

    // Run until the program parks itself on the halt loop
    let halt = 0x800F;
    let mut instructions = 0;
    while cpu.pc() != halt {
        cpu.step();
        instructions += 1;
    }

    println!(
        "Executed {} instructions in {} cycles\n",
        instructions,
        cpu.cycles()
    );
    print_state(&cpu);
    println!("  $0200 = {}", cpu.memory().peek(0x0200));

    Ok(())
}

fn print_state<M: MemoryBus>(cpu: &CPU<M>) {
    let regs = cpu.registers();
    println!("CPU State:");
    println!("----------");
    println!("  PC: 0x{:04X}", regs.pc);
    println!("  SP: 0x{:02X} (Stack: 0x{:04X})", regs.sp, regs.stack_addr());
    println!("  A:  0x{:02X}", regs.a);
    println!("  X:  0x{:02X}", regs.x);
    println!("  Y:  0x{:02X}", regs.y);
    println!(
        "  Status: 0x{:02X} (NV-BDIZC: {:08b})",
        regs.p.bits(),
        regs.p.bits()
    );
    println!("  Cycles: {}\n", cpu.cycles());
}
