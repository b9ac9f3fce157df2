//! Instruction decoder

use crate::disassembler::DecodedInstruction;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;
use crate::{ExecutionError, Result};

/// Decodes the instruction whose opcode byte is at `address`.
///
/// Operand bytes are fetched according to the table entry's size: none for
/// 1-byte instructions, a zero-extended byte for 2-byte instructions, and a
/// little-endian word for 3-byte instructions. Operand fetches wrap at
/// 0xFFFF, not at page boundaries.
///
/// # Errors
///
/// `InvalidInstructionLength` if the table entry's size is outside 1..=3.
pub fn decode<M: MemoryBus>(memory: &M, address: u16) -> Result<DecodedInstruction> {
    let opcode = memory.read(address);
    let instruction = &OPCODE_TABLE[opcode as usize];

    let operand = match instruction.size_bytes {
        1 => 0,
        2 => memory.read(address.wrapping_add(1)) as u16,
        3 => u16::from_le_bytes([
            memory.read(address.wrapping_add(1)),
            memory.read(address.wrapping_add(2)),
        ]),
        length => return Err(ExecutionError::InvalidInstructionLength { opcode, length }),
    };

    Ok(DecodedInstruction {
        instruction,
        address,
        operand,
        extra_cycles: 0,
    })
}
