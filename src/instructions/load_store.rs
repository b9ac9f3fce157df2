//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update N and Z and may pay the page-crossing penalty. Stores never
//! touch flags and always take their fixed cycle count.

use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.a = cpu.operand_byte(instruction)?;
    cpu.registers.modify_nz(cpu.registers.a);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.x = cpu.operand_byte(instruction)?;
    cpu.registers.modify_nz(cpu.registers.x);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.y = cpu.operand_byte(instruction)?;
    cpu.registers.modify_nz(cpu.registers.y);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let address = cpu.required_address(instruction)?;
    cpu.write_byte(address, cpu.registers.a);
    Ok(())
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let address = cpu.required_address(instruction)?;
    cpu.write_byte(address, cpu.registers.x);
    Ok(())
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let address = cpu.required_address(instruction)?;
    cpu.write_byte(address, cpu.registers.y);
    Ok(())
}
