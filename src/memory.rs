//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. RAM, ROM, memory-mapped I/O and banking all live behind
//! this trait; the CPU only ever sees byte reads and writes on a 16-bit address.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads may return garbage
//! - Writes to ROM/unmapped regions may be ignored
//! - Debug reads go through `peek`, which must not disturb device state

use std::fmt;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
///
/// # Design
///
/// - `read(&mut self)`: the access the CPU performs while executing. Devices may
///   react to it (clearing a status latch, advancing a FIFO).
/// - `peek(&self)`: the read-only hint used by disassemblers and debuggers. It
///   must return what `read` would return without any side effect.
/// - `write(&mut self)`: never fails; read-only regions silently drop the write.
///
/// Plain RAM only needs `peek` and `write`; `read` defaults to `peek`.
///
/// # Examples
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn peek(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
///
/// let mut mem = RomRamMemory { ram: [0; 0x8000], rom: [0xEA; 0x8000] };
/// mem.write(0x9000, 0x00);
/// assert_eq!(mem.read(0x9000), 0xEA);
/// ```
pub trait MemoryBus {
    /// Reads a byte as part of instruction execution.
    ///
    /// This method must never panic. The default forwards to [`peek`](Self::peek).
    fn read(&mut self, addr: u16) -> u8 {
        self.peek(addr)
    }

    /// Reads a byte without side effects.
    fn peek(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only or unmapped,
    /// implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Checks if the IRQ (Interrupt Request) line is active.
    ///
    /// The IRQ line is level-sensitive and shared: it stays asserted until every
    /// device has been acknowledged. The CPU samples it at instruction boundaries.
    fn irq_active(&self) -> bool {
        false
    }
}

impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn peek(&self, addr: u16) -> u8 {
        (**self).peek(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }

    fn irq_active(&self) -> bool {
        (**self).irq_active()
    }
}

/// Errors raised while preparing memory contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// The image does not fit between `origin` and 0xFFFF.
    ImageOverflow {
        /// Load address of the first byte.
        origin: u16,
        /// Length of the rejected image in bytes.
        len: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryError::ImageOverflow { origin, len } => write!(
                f,
                "{} byte image loaded at 0x{:04X} runs past 0xFFFF",
                len, origin
            ),
        }
    }
}

impl std::error::Error for MemoryError {}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to a single contiguous RAM array initialized
/// to zero. Useful for tests and for programs that need no ROM/RAM distinction.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
/// memory.load(0x8000, &[0xA9, 0x42]).unwrap(); // LDA #$42
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
    irq: bool,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
            irq: false,
        }
    }

    /// Copies `bytes` into memory starting at `origin`.
    ///
    /// Fails without writing anything if the image would run past 0xFFFF.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) -> Result<(), MemoryError> {
        let start = origin as usize;
        let end = start + bytes.len();
        if end > self.data.len() {
            return Err(MemoryError::ImageOverflow {
                origin,
                len: bytes.len(),
            });
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Writes the little-endian reset vector at 0xFFFC/0xFFFD.
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.set_vector(0xFFFC, addr);
    }

    /// Writes the little-endian IRQ/BRK vector at 0xFFFE/0xFFFF.
    pub fn set_irq_vector(&mut self, addr: u16) {
        self.set_vector(0xFFFE, addr);
    }

    /// Writes the little-endian NMI vector at 0xFFFA/0xFFFB.
    pub fn set_nmi_vector(&mut self, addr: u16) {
        self.set_vector(0xFFFA, addr);
    }

    /// Drives the IRQ line reported through [`MemoryBus::irq_active`].
    pub fn set_irq_line(&mut self, active: bool) {
        self.irq = active;
    }

    fn set_vector(&mut self, at: u16, addr: u16) {
        let [lo, hi] = addr.to_le_bytes();
        self.data[at as usize] = lo;
        self.data[at as usize + 1] = hi;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn irq_active(&self) -> bool {
        self.irq
    }
}
