//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer except TXS updates N and Z from the copied value.

use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.x = cpu.registers.a;
    cpu.registers.modify_nz(cpu.registers.x);
    Ok(())
}

pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.y = cpu.registers.a;
    cpu.registers.modify_nz(cpu.registers.y);
    Ok(())
}

pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.a = cpu.registers.x;
    cpu.registers.modify_nz(cpu.registers.a);
    Ok(())
}

pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.a = cpu.registers.y;
    cpu.registers.modify_nz(cpu.registers.a);
    Ok(())
}

pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.x = cpu.registers.sp;
    cpu.registers.modify_nz(cpu.registers.x);
    Ok(())
}

/// TXS is the only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.sp = cpu.registers.x;
    Ok(())
}
