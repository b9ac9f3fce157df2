//! # Branch Instructions
//!
//! This module implements the eight conditional branches (BCC, BCS, BEQ, BNE,
//! BMI, BPL, BVC, BVS). Each tests one flag against an expected value.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the address of the following instruction.
//! Cycle timing varies based on whether the branch is taken and whether a page boundary is crossed.

use tracing::debug;

use crate::flags::Flag;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

/// Branches if `flag` equals `expected`.
///
/// Cycle timing:
/// - base cycles if the branch is not taken
/// - +1 if the branch is taken
/// - +1 more if the target lies on a different page than the next instruction
///
/// No flags are affected.
pub(crate) fn branch_if<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
    flag: Flag,
    expected: bool,
) -> Result<(), ExecutionError> {
    if cpu.registers.flag(flag) != expected {
        return Ok(());
    }

    let offset = cpu.decoded_value(instruction)? as u8 as i8;

    // PC already points past the branch
    let next_pc = cpu.registers.pc;
    let target_pc = next_pc.wrapping_add_signed(offset as i16);

    instruction.extra_cycles += 1;
    if (next_pc & 0xFF00) != (target_pc & 0xFF00) {
        instruction.extra_cycles += 1;
        debug!(from = next_pc, to = target_pc, "branch crossed page");
    }

    cpu.registers.pc = target_pc;
    Ok(())
}
