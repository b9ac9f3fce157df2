//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left (shifts in 0)
//! - LSR: Logical Shift Right (shifts in 0)
//! - ROL: Rotate Left (shifts in the old carry)
//! - ROR: Rotate Right (shifts in the old carry)
//!
//! Each works on the accumulator or on memory. The bit shifted out lands in
//! C; N and Z come from the result.

use super::read_modify_write;
use crate::flags::Flag;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 moves into C and bit 0 becomes 0. N and Z reflect the result.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instruction, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 moves into C and bit 7 becomes 0, so N is always cleared. Z
/// reflects the result.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instruction, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old C enters bit 0 and bit 7 moves into C. N and Z reflect the
/// result.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instruction, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old C enters bit 7 and bit 0 moves into C. N and Z reflect the
/// result.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    shift(cpu, instruction, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}

/// `op` maps (value, carry in) to (result, carry out).
fn shift<M, F>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
    op: F,
) -> Result<(), ExecutionError>
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let result = read_modify_write(cpu, instruction, |cpu, value| {
        let (result, carry_out) = op(value, cpu.registers.flag(Flag::Carry));
        cpu.registers.flags.modify(Flag::Carry, carry_out);
        result
    })?;

    cpu.registers.modify_nz(result);
    Ok(())
}
