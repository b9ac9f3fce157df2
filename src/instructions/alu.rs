//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - BIT: Bit Test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! ADC and SBC honor the Decimal flag. In decimal mode ADC derives N, V and Z
//! from the unadjusted BCD sum, and SBC derives every flag from the binary
//! difference, matching the NMOS part.

use crate::flags::Flag;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags affected (binary mode):
/// - C: set if the unsigned sum exceeds 0xFF
/// - V: set if the carry into bit 7 differs from the carry out of bit 7
/// - N, Z: from the result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;

    if cpu.registers.flag(Flag::Decimal) {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }

    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry is the inverted borrow: it is set when
/// no borrow was needed.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;

    if cpu.registers.flag(Flag::Decimal) {
        subtract_decimal(cpu, value);
    } else {
        add_binary(cpu, !value);
    }

    Ok(())
}

/// Binary `A + value + C`, shared by ADC and SBC (which adds the complement).
fn add_binary<M: MemoryBus>(cpu: &mut MPU<M>, value: u8) {
    let a = cpu.registers.a;
    let carry_in = cpu.registers.flag(Flag::Carry) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let carry_out = sum > 0xFF;
    let carry_into_sign = ((a & 0x7F) as u16 + (value & 0x7F) as u16 + carry_in) & 0x80 != 0;

    let result = sum as u8;
    let flags = &mut cpu.registers.flags;
    flags.modify(Flag::Carry, carry_out);
    flags.modify(Flag::Overflow, carry_into_sign != carry_out);
    flags.modify_nz(result as u16);

    cpu.registers.a = result;
}

fn add_decimal<M: MemoryBus>(cpu: &mut MPU<M>, value: u8) {
    let a = cpu.registers.a;
    let carry_in = cpu.registers.flag(Flag::Carry) as u8;

    let mut half_carry = 0;
    let mut adjust_low = 0;
    let mut adjust_high = 0;

    let low = (value & 0x0F) + (a & 0x0F) + carry_in;
    if low > 9 {
        half_carry = 1;
        adjust_low = 6;
    }

    let high = (value >> 4) + (a >> 4) + half_carry;
    let carry_out = high > 9;
    if carry_out {
        adjust_high = 6;
    }

    // Flags come from the sum before decimal adjustment
    let unadjusted = ((high & 0x0F) << 4) | (low & 0x0F);
    let flags = &mut cpu.registers.flags;
    flags.modify(Flag::Carry, carry_out);
    flags.modify_nz(unadjusted as u16);
    flags.modify(Flag::Overflow, !(a ^ value) & (a ^ unadjusted) & 0x80 != 0);

    let low = ((low & 0x0F) + adjust_low) & 0x0F;
    let high = ((high & 0x0F) + adjust_high) & 0x0F;
    cpu.registers.a = (high << 4) | low;
}

fn subtract_decimal<M: MemoryBus>(cpu: &mut MPU<M>, value: u8) {
    let a = cpu.registers.a;
    let borrow = !cpu.registers.flag(Flag::Carry) as i16;

    let mut low = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut high = (a >> 4) as i16 - (value >> 4) as i16;
    if low < 0 {
        low -= 6;
        high -= 1;
    }
    if high < 0 {
        high -= 6;
    }

    // N, V, Z and C are those of the binary subtraction
    add_binary(cpu, !value);
    cpu.registers.a = ((high << 4) | (low & 0x0F)) as u8;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;
    cpu.registers.a &= value;
    cpu.registers.modify_nz(cpu.registers.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;
    cpu.registers.a |= value;
    cpu.registers.modify_nz(cpu.registers.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;
    cpu.registers.a ^= value;
    cpu.registers.modify_nz(cpu.registers.a);
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is not modified.
///
/// Flags affected:
/// - Z: set if `A & M` is zero
/// - N: copied from bit 7 of M
/// - V: copied from bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;

    let flags = &mut cpu.registers.flags;
    flags.modify(Flag::Zero, cpu.registers.a & value == 0);
    flags.modify(Flag::Negative, value & 0x80 != 0);
    flags.modify(Flag::Overflow, value & 0x40 != 0);

    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;
    let register = cpu.registers.a;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;
    let register = cpu.registers.x;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let value = cpu.operand_byte(instruction)?;
    let register = cpu.registers.y;
    compare(cpu, register, value);
    Ok(())
}

/// C = register >= value; N and Z from `register - value`.
fn compare<M: MemoryBus>(cpu: &mut MPU<M>, register: u8, value: u8) {
    cpu.registers.flags.modify(Flag::Carry, register >= value);
    cpu.registers.modify_nz(register.wrapping_sub(value));
}
