//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory; INX, INY, DEX and DEY modify the index registers.
//! All wrap at 8 bits and update N and Z from the result.

use super::read_modify_write;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let result = read_modify_write(cpu, instruction, |_, value| value.wrapping_add(1))?;
    cpu.registers.modify_nz(result);
    Ok(())
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let result = read_modify_write(cpu, instruction, |_, value| value.wrapping_sub(1))?;
    cpu.registers.modify_nz(result);
    Ok(())
}

pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.x = cpu.registers.x.wrapping_add(1);
    cpu.registers.modify_nz(cpu.registers.x);
    Ok(())
}

pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.y = cpu.registers.y.wrapping_add(1);
    cpu.registers.modify_nz(cpu.registers.y);
    Ok(())
}

pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.x = cpu.registers.x.wrapping_sub(1);
    cpu.registers.modify_nz(cpu.registers.x);
    Ok(())
}

pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.y = cpu.registers.y.wrapping_sub(1);
    cpu.registers.modify_nz(cpu.registers.y);
    Ok(())
}
