//! Formatting functions for decoded instructions
//!
//! The text form is `"{address:04X}: {mnemonic}{operand}"`, for example
//! `"1000: ADC #$12"` or `"1000: BNE -$05"`.

use std::fmt;

use crate::addressing::AddressingMode;
use crate::disassembler::DecodedInstruction;

/// Width of the raw-bytes column in listings: up to three `" XX"` groups.
const BYTES_COLUMN_WIDTH: usize = 9;

/// Format the operand suffix for the instruction's addressing mode.
///
/// The suffix includes its leading space; implied instructions return an
/// empty string.
pub fn format_operand(instr: &DecodedInstruction) -> String {
    use AddressingMode::*;

    let operand = instr.operand;

    match instr.addressing_mode() {
        None | Implied => String::new(),
        Accumulator => " A".to_string(),
        Immediate => format!(" #${:02X}", operand),
        Branch => {
            let displacement = operand as u8 as i8;
            if displacement >= 0 {
                format!(" ${:02X}", displacement)
            } else {
                format!(" -${:02X}", displacement.unsigned_abs())
            }
        }
        ZeroPage => format!(" ${:02X}", operand),
        ZeroPageX => format!(" ${:02X},X", operand),
        ZeroPageY => format!(" ${:02X},Y", operand),
        Absolute => format!(" ${:04X}", operand),
        AbsoluteX => format!(" ${:04X},X", operand),
        AbsoluteY => format!(" ${:04X},Y", operand),
        Indirect => format!(" (${:04X})", operand),
        IndirectX => format!(" (${:02X},X)", operand),
        IndirectY => format!(" (${:02X}),Y", operand),
    }
}

impl DecodedInstruction {
    /// Disassembly including the raw instruction bytes.
    ///
    /// ```
    /// use mpu6502::{FlatMemory, MemoryBus, MPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x1000, &[0x6D, 0x00, 0x20]);
    ///
    /// let mpu = MPU::new(mem, 0x1000);
    /// assert_eq!(mpu.decode(0x1000).unwrap().listing(), "1000: 6D 00 20 ADC $2000");
    /// ```
    pub fn listing(&self) -> String {
        let bytes: String = self
            .bytes()
            .iter()
            .map(|byte| format!(" {:02X}", byte))
            .collect();

        format!(
            "{:04X}:{:<width$} {}{}",
            self.address,
            bytes,
            self.mnemonic(),
            format_operand(self),
            width = BYTES_COLUMN_WIDTH
        )
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}: {}{}",
            self.address,
            self.mnemonic(),
            format_operand(self)
        )
    }
}
