//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the clock-driven fetch-decode-execute state machine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next unconsumed byte
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: packed [`Status`] register
//! - **Execution latches**: current opcode, fetched operand, resolved absolute
//!   address and relative branch offset. They only mean something while the
//!   instruction that wrote them is in flight.
//! - **Cycle counters**: cycles left for the instruction in flight, and a
//!   monotonically increasing total
//!
//! ## Execution Model
//!
//! The CPU is advanced one clock pulse at a time with [`CPU::clock`]. The whole
//! instruction is executed on the first pulse; the remaining pulses only count
//! down its cycle cost. Convenience drivers sit on top:
//! - `step()`: Pulse until the next instruction boundary
//! - `run_for_cycles()`: Step until a cycle budget is exhausted

use log::{debug, trace};

use crate::{AddressingMode, MemoryBus, Registers, Status, OPCODE_TABLE};

/// NMI vector location.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles charged for the reset, IRQ and NMI entry sequences.
const INTERRUPT_CYCLES: u8 = 7;

macro_rules! flag_accessors {
    ($($get:ident, $set:ident => $flag:ident, $name:literal;)*) => {
        $(
            #[doc = concat!("Returns true if the ", $name, " flag is set.")]
            pub fn $get(&self) -> bool {
                self.p.contains(Status::$flag)
            }

            #[doc = concat!("Sets or clears the ", $name, " flag.")]
            pub fn $set(&mut self, value: bool) {
                self.p.set(Status::$flag, value);
            }
        )*
    };
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait. Because
/// `MemoryBus` is implemented for `&mut T`, a system that owns its bus can lend
/// it to the CPU as `CPU<&mut Bus>`.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.set_reset_vector(0x8000);
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next unconsumed byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) p: Status,

    /// Operand of the instruction in flight
    pub(crate) fetched: u8,

    /// Set once `fetched` holds this instruction's operand
    pub(crate) operand_latched: bool,

    /// Effective address resolved for the instruction in flight
    pub(crate) abs_addr: u16,

    /// Sign-extended branch displacement
    pub(crate) rel_addr: u16,

    /// Opcode of the instruction in flight
    pub(crate) opcode: u8,

    /// Pulses left before the next fetch
    pub(crate) remaining_cycles: u8,

    /// Total pulses since power-on
    pub(crate) cycles: u64,

    pub(crate) nmi_pending: bool,
    pub(crate) irq_pending: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// The CPU is initialized to the 6502 power-on state:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - Stack pointer (SP) is set to 0xFD
    /// - Status register has the Interrupt Disable and unused bits set
    /// - All other registers (A, X, Y) are zeroed
    ///
    /// Unlike [`reset`](Self::reset), no cycles are owed: the first
    /// [`clock`](Self::clock) pulse fetches the first instruction.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            p: Status::POWER_ON,
            fetched: 0x00,
            operand_latched: false,
            abs_addr: 0x0000,
            rel_addr: 0x0000,
            opcode: 0x00,
            remaining_cycles: 0,
            cycles: 0,
            nmi_pending: false,
            irq_pending: false,
            memory,
        };
        cpu.pc = cpu.read_vector(RESET_VECTOR);
        cpu
    }

    /// Forces the CPU into its reset state.
    ///
    /// Registers return to their power-on values, pending interrupts are dropped
    /// and PC is reloaded from the reset vector. The reset sequence owes seven
    /// cycles, so the next fetch happens on the eighth pulse. The total cycle
    /// counter keeps running.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.p = Status::POWER_ON;
        self.abs_addr = 0x0000;
        self.rel_addr = 0x0000;
        self.fetched = 0x00;
        self.operand_latched = false;
        self.nmi_pending = false;
        self.irq_pending = false;
        self.pc = self.read_vector(RESET_VECTOR);
        self.remaining_cycles = INTERRUPT_CYCLES;
        debug!("reset: pc=0x{:04X}", self.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// The request is taken at the next instruction boundary if the I flag is
    /// clear at that point, and dropped otherwise. Devices that hold the line
    /// asserted should report it through [`MemoryBus::irq_active`] instead.
    pub fn irq(&mut self) {
        self.irq_pending = true;
    }

    /// Requests a non-maskable interrupt, taken at the next instruction boundary.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Advances the CPU by exactly one clock pulse.
    ///
    /// When no cycles are owed, the pulse starts the next instruction:
    /// 1. Fetch the opcode at PC and advance PC
    /// 2. Look up the opcode table entry
    /// 3. Charge the entry's base cycles
    /// 4. Resolve the addressing mode (may consume operand bytes)
    /// 5. Execute the operation
    /// 6. Charge one more cycle only if both the mode and the operation report a
    ///    page crossing
    ///
    /// A pending NMI, or an IRQ with the I flag clear, replaces the fetch with
    /// the interrupt entry sequence. Every pulse, including the one that
    /// dispatched, then counts one cycle down.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.write(0x8000, 0xEA); // NOP, 2 cycles
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.clock();
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.remaining_cycles(), 1);
    /// cpu.clock();
    /// assert!(cpu.complete());
    /// ```
    pub fn clock(&mut self) {
        if self.remaining_cycles == 0 {
            if self.nmi_pending {
                self.nmi_pending = false;
                debug!("nmi: pc=0x{:04X}", self.pc);
                self.enter_interrupt(NMI_VECTOR);
            } else if self.irq_requested() {
                self.irq_pending = false;
                debug!("irq: pc=0x{:04X}", self.pc);
                self.enter_interrupt(IRQ_VECTOR);
            } else {
                self.irq_pending = false;
                self.dispatch();
            }
        }

        self.remaining_cycles -= 1;
        self.cycles += 1;
    }

    /// Pulses the clock until the CPU reaches the next instruction boundary.
    ///
    /// Called at a boundary, this executes exactly one instruction (or interrupt
    /// entry). Called mid-instruction, it finishes the instruction in flight.
    /// Returns the number of pulses consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.set_reset_vector(0x8000);
    /// mem.load(0x8000, &[0x69, 0x05]).unwrap(); // ADC #$05
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_a(0x10);
    ///
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.a(), 0x15);
    /// assert_eq!(cpu.pc(), 0x8002);
    /// ```
    pub fn step(&mut self) -> u64 {
        let start = self.cycles;
        loop {
            self.clock();
            if self.remaining_cycles == 0 {
                break;
            }
        }
        self.cycles - start
    }

    /// Runs whole instructions until at least `cycle_budget` pulses have elapsed.
    ///
    /// Returns the actual number of pulses consumed, which may exceed the budget
    /// by up to one instruction. Useful for frame-locked execution models (e.g.,
    /// 29780 cycles per 60Hz NTSC frame).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.cycles;
        while self.cycles - start < cycle_budget {
            self.step();
        }
        self.cycles - start
    }

    /// Returns true at an instruction boundary (no cycles owed).
    pub fn complete(&self) -> bool {
        self.remaining_cycles == 0
    }

    fn dispatch(&mut self) {
        let start_pc = self.pc;
        self.opcode = self.read_pc();
        self.operand_latched = false;

        let entry = OPCODE_TABLE[self.opcode as usize];
        self.p.insert(Status::U);
        self.remaining_cycles = entry.base_cycles;

        let mode_page_crossed = self.resolve(entry.addressing_mode);
        let op_page_sensitive = self.execute(entry.operation);

        // A crossing costs a cycle only when the operation is one that has to
        // redo its read; stores and read-modify-writes already pay for it.
        self.remaining_cycles += u8::from(mode_page_crossed & op_page_sensitive);
        self.p.insert(Status::U);

        trace!(
            "{:04X}  {:02X}  {} {:?} cycles={} a={:02X} x={:02X} y={:02X} p={:02X} sp={:02X}",
            start_pc,
            self.opcode,
            entry.mnemonic,
            entry.addressing_mode,
            self.remaining_cycles,
            self.a,
            self.x,
            self.y,
            self.p.bits(),
            self.sp
        );
    }

    fn irq_requested(&self) -> bool {
        !self.p.contains(Status::I) && (self.irq_pending || self.memory.irq_active())
    }

    fn enter_interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);
        self.push(self.p.difference(Status::B).union(Status::U).bits());
        self.p.insert(Status::I);
        self.pc = self.read_vector(vector);
        self.remaining_cycles = INTERRUPT_CYCLES;
    }

    /// Materializes the operand of the instruction in flight.
    ///
    /// Immediate operands were latched by the resolver and Implied operands are
    /// the accumulator; anything else is read once from `abs_addr`. Later calls
    /// during the same instruction return the latched value without touching
    /// the bus.
    pub(crate) fn fetch(&mut self) -> u8 {
        if !self.operand_latched {
            self.fetched = match self.current_mode() {
                AddressingMode::Implied => self.a,
                _ => self.memory.read(self.abs_addr),
            };
            self.operand_latched = true;
        }
        self.fetched
    }

    /// Addressing mode of the instruction in flight.
    pub(crate) fn current_mode(&self) -> AddressingMode {
        OPCODE_TABLE[self.opcode as usize].addressing_mode
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 | self.sp as u16)
    }

    /// Pushes high byte first, so the word sits little-endian on the stack.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn read_vector(&mut self, vector: u16) -> u16 {
        let lo = self.memory.read(vector);
        let hi = self.memory.read(vector.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    // ========== Register Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.p
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register. All eight bits are stored as given.
    pub fn set_status(&mut self, value: u8) {
        self.p = Status::from_bits_retain(value);
    }

    /// Returns true if every flag in `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.p.contains(flag)
    }

    /// Sets or clears `flag`, leaving the other bits untouched.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.p.set(flag, value);
    }

    flag_accessors! {
        flag_c, set_flag_c => C, "Carry";
        flag_z, set_flag_z => Z, "Zero";
        flag_i, set_flag_i => I, "Interrupt Disable";
        flag_d, set_flag_d => D, "Decimal mode";
        flag_b, set_flag_b => B, "Break";
        flag_v, set_flag_v => V, "Overflow";
        flag_n, set_flag_n => N, "Negative";
    }

    /// Copy of the programmer-visible registers.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            p: self.p,
        }
    }

    // ========== Execution State ==========

    /// Opcode of the most recently dispatched instruction.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Operand latched by the most recent instruction.
    pub fn fetched(&self) -> u8 {
        self.fetched
    }

    /// Effective address resolved by the most recent instruction.
    pub fn abs_addr(&self) -> u16 {
        self.abs_addr
    }

    /// Sign-extended displacement resolved by the most recent relative-mode instruction.
    pub fn rel_addr(&self) -> u16 {
        self.rel_addr
    }

    /// Pulses left before the next fetch.
    pub fn remaining_cycles(&self) -> u8 {
        self.remaining_cycles
    }

    /// Returns the total number of clock pulses since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Memory Access ==========

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands the bus back.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
