//! # Status Flags
//!
//! The processor status register is a single byte. Each flag owns exactly one
//! bit of it, so setting or clearing one flag never disturbs another.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, forced to 1 when pushed
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use std::fmt;

/// A single status flag, carrying its bit mask as discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    Negative = 0b1000_0000,
    Overflow = 0b0100_0000,
    Unused = 0b0010_0000,
    Break = 0b0001_0000,
    Decimal = 0b0000_1000,
    Interrupt = 0b0000_0100,
    Zero = 0b0000_0010,
    Carry = 0b0000_0001,
}

impl Flag {
    /// All flags, most significant bit first.
    pub const ALL: [Flag; 8] = [
        Flag::Negative,
        Flag::Overflow,
        Flag::Unused,
        Flag::Break,
        Flag::Decimal,
        Flag::Interrupt,
        Flag::Zero,
        Flag::Carry,
    ];

    /// Bit mask of this flag within the status byte.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

/// The processor status register.
///
/// # Examples
///
/// ```
/// use mpu6502::{Flag, Flags};
///
/// let mut flags = Flags::default();
/// flags.set_all(&[Flag::Carry, Flag::Overflow]);
/// assert_eq!(flags.bits(), 0b0100_0001);
/// assert_eq!(flags.to_string(), "nV-bdiCz");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Wraps a raw status byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw status byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `flag` is set.
    pub const fn contains(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets a single flag.
    pub fn set(&mut self, flag: Flag) {
        self.0 |= flag.mask();
    }

    /// Clears a single flag.
    pub fn reset(&mut self, flag: Flag) {
        self.0 &= !flag.mask();
    }

    /// Sets or clears `flag` according to `condition`.
    pub fn modify(&mut self, flag: Flag, condition: bool) {
        if condition {
            self.set(flag);
        } else {
            self.reset(flag);
        }
    }

    /// Flips a single flag.
    pub fn toggle(&mut self, flag: Flag) {
        self.0 ^= flag.mask();
    }

    /// Sets every flag in `flags` with a single write to the status byte.
    pub fn set_all(&mut self, flags: &[Flag]) {
        self.0 |= Self::combined(flags);
    }

    /// Clears every flag in `flags` with a single write to the status byte.
    pub fn reset_all(&mut self, flags: &[Flag]) {
        self.0 &= !Self::combined(flags);
    }

    /// Updates Zero and Negative from the low byte of `value`.
    pub fn modify_nz(&mut self, value: u16) {
        let value = value as u8;
        self.modify(Flag::Zero, value == 0);
        self.modify(Flag::Negative, value & Flag::Negative.mask() != 0);
    }

    fn combined(flags: &[Flag]) -> u8 {
        flags.iter().fold(0, |acc, flag| acc | flag.mask())
    }
}

impl From<u8> for Flags {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

/// Renders as `NV-BDICZ`, upper case when set. Carry is printed before Zero.
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = |flag: Flag, set: char, clear: char| {
            if self.contains(flag) {
                set
            } else {
                clear
            }
        };

        let rendered: String = [
            letter(Flag::Negative, 'N', 'n'),
            letter(Flag::Overflow, 'V', 'v'),
            '-',
            letter(Flag::Break, 'B', 'b'),
            letter(Flag::Decimal, 'D', 'd'),
            letter(Flag::Interrupt, 'I', 'i'),
            letter(Flag::Carry, 'C', 'c'),
            letter(Flag::Zero, 'Z', 'z'),
        ]
        .iter()
        .collect();

        f.write_str(&rendered)
    }
}
