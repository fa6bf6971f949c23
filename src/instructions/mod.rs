//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function that takes a
//! mutable reference to the CPU after the addressing mode has been resolved.
//!
//! Every instruction returns whether it is sensitive to a page crossing in its
//! addressing mode. The engine only charges the extra cycle when the mode
//! crossed a page *and* the instruction says it cares.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Operation, CPU};

impl<M: MemoryBus> CPU<M> {
    /// Runs the instruction selected by `operation`.
    pub(crate) fn execute(&mut self, operation: Operation) -> bool {
        use Operation::*;

        match operation {
            Adc => alu::execute_adc(self),
            Sbc => alu::execute_sbc(self),
            And => alu::execute_and(self),
            Ora => alu::execute_ora(self),
            Eor => alu::execute_eor(self),
            Cmp => alu::execute_cmp(self),
            Cpx => alu::execute_cpx(self),
            Cpy => alu::execute_cpy(self),
            Bit => alu::execute_bit(self),

            Bcc => branches::execute_bcc(self),
            Bcs => branches::execute_bcs(self),
            Beq => branches::execute_beq(self),
            Bne => branches::execute_bne(self),
            Bmi => branches::execute_bmi(self),
            Bpl => branches::execute_bpl(self),
            Bvc => branches::execute_bvc(self),
            Bvs => branches::execute_bvs(self),

            Asl => shifts::execute_asl(self),
            Lsr => shifts::execute_lsr(self),
            Rol => shifts::execute_rol(self),
            Ror => shifts::execute_ror(self),

            Lda => load_store::execute_lda(self),
            Ldx => load_store::execute_ldx(self),
            Ldy => load_store::execute_ldy(self),
            Sta => load_store::execute_sta(self),
            Stx => load_store::execute_stx(self),
            Sty => load_store::execute_sty(self),

            Inc => inc_dec::execute_inc(self),
            Dec => inc_dec::execute_dec(self),
            Inx => inc_dec::execute_inx(self),
            Iny => inc_dec::execute_iny(self),
            Dex => inc_dec::execute_dex(self),
            Dey => inc_dec::execute_dey(self),

            Jmp => control::execute_jmp(self),
            Jsr => control::execute_jsr(self),
            Rts => control::execute_rts(self),
            Rti => control::execute_rti(self),
            Brk => control::execute_brk(self),
            Nop => control::execute_nop(self),
            Xxx => control::execute_xxx(self),

            Pha => stack::execute_pha(self),
            Php => stack::execute_php(self),
            Pla => stack::execute_pla(self),
            Plp => stack::execute_plp(self),

            Clc => flags::execute_clc(self),
            Sec => flags::execute_sec(self),
            Cli => flags::execute_cli(self),
            Sei => flags::execute_sei(self),
            Clv => flags::execute_clv(self),
            Cld => flags::execute_cld(self),
            Sed => flags::execute_sed(self),

            Tax => transfer::execute_tax(self),
            Tay => transfer::execute_tay(self),
            Txa => transfer::execute_txa(self),
            Tya => transfer::execute_tya(self),
            Tsx => transfer::execute_tsx(self),
            Txs => transfer::execute_txs(self),
        }
    }
}
