//! # Register File
//!
//! The MPU's programmer-visible state. All 8-bit registers are `u8` and the
//! program counter is `u16`, so the masking the hardware performs is carried
//! by the types: arithmetic on them wraps explicitly.

use std::fmt;

use crate::flags::{Flag, Flags};

/// Accumulator, index registers, status, program counter and stack pointer.
///
/// The stack pointer is an offset into page one (`STACK_BASE`); it wraps
/// modulo 256 on push and pop without any overflow detection.
///
/// # Examples
///
/// ```
/// use mpu6502::{Flag, Registers};
///
/// let mut regs = Registers::default();
/// regs.a = 0x12;
/// regs.flags.set(Flag::Carry);
/// assert_eq!(
///     regs.to_string(),
///     "Registers(A=12, X=00, Y=00, PC=0000, SP=00, FLAGS=nv-bdiCz)"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Processor status
    pub flags: Flags,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,
}

impl Registers {
    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.flags.contains(flag)
    }

    /// Updates Zero and Negative from `value`.
    pub fn modify_nz(&mut self, value: u8) {
        self.flags.modify_nz(value as u16);
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers(A={:02x}, X={:02x}, Y={:02x}, PC={:04x}, SP={:02x}, FLAGS={})",
            self.a, self.x, self.y, self.pc, self.sp, self.flags
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let regs = Registers::default();
        assert_eq!(regs.a, 0);
        assert_eq!(regs.x, 0);
        assert_eq!(regs.y, 0);
        assert_eq!(regs.pc, 0);
        assert_eq!(regs.sp, 0);
        assert_eq!(regs.flags.bits(), 0);
    }

    #[test]
    fn test_modify_nz_through_registers() {
        let mut regs = Registers::default();
        regs.modify_nz(0x80);
        assert!(regs.flag(Flag::Negative));
        assert!(!regs.flag(Flag::Zero));
    }

    #[test]
    fn test_display() {
        let regs = Registers {
            a: 0xAB,
            x: 0x01,
            y: 0xFE,
            flags: Flags::from_bits(0x81),
            pc: 0xC000,
            sp: 0xFD,
        };
        assert_eq!(
            regs.to_string(),
            "Registers(A=ab, X=01, Y=fe, PC=c000, SP=fd, FLAGS=Nv-bdiCz)"
        );
    }
}
