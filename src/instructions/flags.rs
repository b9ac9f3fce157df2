//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode, execute in 2 cycles and
//! touch no flag other than their own.

use crate::flags::Flag;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

pub(crate) fn execute_clc<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags.reset(Flag::Carry);
    Ok(())
}

pub(crate) fn execute_sec<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags.set(Flag::Carry);
    Ok(())
}

pub(crate) fn execute_cli<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags.reset(Flag::Interrupt);
    Ok(())
}

pub(crate) fn execute_sei<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags.set(Flag::Interrupt);
    Ok(())
}

/// There is no SEV; overflow is only set by ADC, SBC, BIT, PLP and RTI.
pub(crate) fn execute_clv<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags.reset(Flag::Overflow);
    Ok(())
}

pub(crate) fn execute_cld<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags.reset(Flag::Decimal);
    Ok(())
}

pub(crate) fn execute_sed<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags.set(Flag::Decimal);
    Ok(())
}
