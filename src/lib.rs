//! # 6502 CPU Emulator Core
//!
//! An instruction-level NMOS 6502 CPU emulator: a clock-driven fetch/decode/execute
//! engine over a table of all 256 opcodes, the twelve addressing modes, and the
//! flag semantics of the documented instruction set, bit-exact with the silicon
//! (including the indirect JMP page-wrap defect and page-crossing cycle penalties).
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory};
//!
//! let mut memory = FlatMemory::new();
//! memory.set_reset_vector(0x8000);
//! memory
//!     .load(0x8000, &[0xA9, 0x7F, 0x69, 0x0A]) // LDA #$7F; ADC #$0A
//!     .unwrap();
//!
//! let mut cpu = CPU::new(memory);
//! cpu.step();
//! cpu.step();
//!
//! assert_eq!(cpu.a(), 0x89);
//! assert!(cpu.flag_v()); // two positives made a negative
//! assert!(cpu.flag_n());
//! assert_eq!(cpu.cycles(), 4);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **Table-Driven Design**: All opcode metadata in a single source of truth; modes and
//!   operations are tags resolved by exhaustive `match`
//! - **Cycle Accuracy**: Instruction-level cycle counts, advanced one clock pulse at a time
//! - **No Runtime Faults**: Every instruction and every addressing mode is total; table
//!   defects fail the build
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the clock state machine
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - Opcode table and operation tags
//! - `addressing` - Addressing modes and their resolvers
//! - `status` - Status register flags
//! - `registers` - Register file snapshot
//! - `disassembler` - Side-effect-free instruction decoder

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus, MemoryError};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use registers::Registers;
pub use status::Status;
