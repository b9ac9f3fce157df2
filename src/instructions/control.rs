//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute, or indirect with the page-wrap bug)
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from Interrupt
//! - BRK: Force Interrupt
//!
//! Handlers run after PC has been advanced, so "PC" below is the address of
//! the following instruction.

use crate::flags::Flag;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, IRQ_BRK_VECTOR, MPU};

/// Status bits forced on in the byte pushed by BRK and PHP (B and bit 5).
pub(crate) const PUSHED_STATUS_BITS: u8 = 0x30;

/// Executes the JMP instruction.
///
/// Absolute mode jumps to the operand. Indirect mode jumps to the word stored
/// at the operand, reading its high byte from the same page (`JMP ($20FF)`
/// takes the high byte from $2000).
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.pc = cpu.required_address(instruction)?;
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC - 1), then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    let target = cpu.required_address(instruction)?;
    cpu.push_word(cpu.registers.pc.wrapping_sub(1));
    cpu.registers.pc = target;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.pc = cpu.pop_word().wrapping_add(1);
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops the status byte (stored as-is, B and bit 5 included), then PC.
pub(crate) fn execute_rti<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.registers.flags = cpu.pop().into();
    cpu.registers.pc = cpu.pop_word();
    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing PC + 1 (the byte after BRK is a padding byte)
/// 2. Pushing the status register with B and bit 5 set
/// 3. Setting the I and B flags
/// 4. Loading PC from the IRQ/BRK vector at $FFFE/F
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut MPU<M>,
    _instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    cpu.push_word(cpu.registers.pc.wrapping_add(1));
    cpu.push(cpu.registers.flags.bits() | PUSHED_STATUS_BITS);

    cpu.registers
        .flags
        .set_all(&[Flag::Interrupt, Flag::Break]);
    cpu.registers.pc = cpu.read_word(IRQ_BRK_VECTOR);

    Ok(())
}
