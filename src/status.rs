//! # Processor Status Register
//!
//! The status register (P) packs eight single-bit flags, least significant first:
//!
//! | Bit | Flag | Meaning |
//! |-----|------|---------|
//! | 0 | C | Carry |
//! | 1 | Z | Zero |
//! | 2 | I | Interrupt disable |
//! | 3 | D | Decimal mode (stored, never honoured by ADC/SBC) |
//! | 4 | B | Break |
//! | 5 | U | Unused, forced to 1 around every dispatched instruction |
//! | 6 | V | Overflow |
//! | 7 | N | Negative |

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status flags.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Status: u8 {
        const C = 0b0000_0001;
        const Z = 0b0000_0010;
        const I = 0b0000_0100;
        const D = 0b0000_1000;
        const B = 0b0001_0000;
        const U = 0b0010_0000;
        const V = 0b0100_0000;
        const N = 0b1000_0000;
    }
}

impl Status {
    /// Status after power-on and reset: interrupts masked, unused bit high.
    pub const POWER_ON: Status = Status::I.union(Status::U);

    /// Sets Z and N from an 8-bit result, leaving every other flag untouched.
    #[inline]
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set(Status::Z, value == 0);
        self.set(Status::N, value & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(Status::C.bits(), 1 << 0);
        assert_eq!(Status::Z.bits(), 1 << 1);
        assert_eq!(Status::I.bits(), 1 << 2);
        assert_eq!(Status::D.bits(), 1 << 3);
        assert_eq!(Status::B.bits(), 1 << 4);
        assert_eq!(Status::U.bits(), 1 << 5);
        assert_eq!(Status::V.bits(), 1 << 6);
        assert_eq!(Status::N.bits(), 1 << 7);
    }

    #[test]
    fn test_set_zn() {
        let mut p = Status::C | Status::V;

        p.set_zn(0x00);
        assert!(p.contains(Status::Z));
        assert!(!p.contains(Status::N));

        p.set_zn(0x80);
        assert!(!p.contains(Status::Z));
        assert!(p.contains(Status::N));

        // Untouched flags survive
        assert!(p.contains(Status::C | Status::V));
    }

    #[test]
    fn test_power_on_value() {
        assert_eq!(Status::POWER_ON.bits(), 0x24);
    }
}
