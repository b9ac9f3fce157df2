//! 6502 Disassembler Module
//!
//! Turns bytes in memory into decoded instructions and their textual form.
//! Decoding only reads memory; it never touches MPU state.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::memory::MemoryBus;
use crate::opcodes::{Instruction, Operation};
use crate::Result;

pub use decoder::decode;

/// A single decoded instruction.
///
/// The invariant opcode metadata stays in the static table and is referenced;
/// only the per-decode fields live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Table entry for the opcode byte
    pub instruction: &'static Instruction,

    /// Memory address where the opcode byte was read
    pub address: u16,

    /// Raw operand: 0, a zero-extended byte, or a little-endian word
    pub operand: u16,

    /// Cycles added by page crossings or taken branches while executing
    pub extra_cycles: u8,
}

impl DecodedInstruction {
    /// The opcode byte value (0x00-0xFF)
    pub fn opcode(&self) -> u8 {
        self.instruction.opcode
    }

    /// Instruction mnemonic (e.g., "LDA", "STA", "???")
    pub fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic
    }

    /// Addressing mode used by this instruction
    pub fn addressing_mode(&self) -> AddressingMode {
        self.instruction.addressing_mode
    }

    /// Total size in bytes (opcode + operands)
    pub fn size_bytes(&self) -> u8 {
        self.instruction.size_bytes
    }

    /// Base cycle cost (excluding penalties)
    pub fn base_cycles(&self) -> u8 {
        self.instruction.base_cycles
    }

    /// Routine the MPU dispatches to
    pub fn operation(&self) -> Operation {
        self.instruction.operation
    }

    /// Base plus extra cycles
    pub fn total_cycles(&self) -> u64 {
        self.base_cycles() as u64 + self.extra_cycles as u64
    }

    /// Address of the instruction that follows this one.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.size_bytes() as u16)
    }

    /// Raw instruction bytes: opcode followed by operand bytes, little-endian.
    pub fn bytes(&self) -> Vec<u8> {
        let [low, high] = self.operand.to_le_bytes();
        match self.size_bytes() {
            2 => vec![self.opcode(), low],
            3 => vec![self.opcode(), low, high],
            _ => vec![self.opcode()],
        }
    }
}

/// Decodes `count` consecutive instructions starting at `start`.
///
/// The address advances by each instruction's size and wraps at 16 bits.
///
/// ```
/// use mpu6502::{disassemble, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x0600, &[0xA9, 0x01, 0x8D, 0x00, 0x02, 0xEA]);
///
/// let lines: Vec<String> = disassemble(&mem, 0x0600, 3)
///     .unwrap()
///     .iter()
///     .map(|instr| instr.to_string())
///     .collect();
///
/// assert_eq!(lines, ["0600: LDA #$01", "0602: STA $0200", "0605: NOP"]);
/// ```
pub fn disassemble<M: MemoryBus>(
    memory: &M,
    start: u16,
    count: usize,
) -> Result<Vec<DecodedInstruction>> {
    let mut instructions = Vec::with_capacity(count);
    let mut address = start;

    for _ in 0..count {
        let instruction = decode(memory, address)?;
        address = instruction.next_address();
        instructions.push(instruction);
    }

    Ok(instructions)
}
