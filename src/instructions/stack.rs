//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use super::control::PUSHED_STATUS_BITS;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

/// Executes the PHA (Push Accumulator) instruction. No flags are affected.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.push(cpu.registers.a);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B and bit 5 set; the live register is unchanged.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.push(cpu.registers.flags.bits() | PUSHED_STATUS_BITS);
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction. Updates N and Z.
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.a = cpu.pop();
    cpu.registers.modify_nz(cpu.registers.a);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// The pulled byte replaces the status register unchanged.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags = cpu.pop().into();
    Ok(())
}
