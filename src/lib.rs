//! # 6502 MPU Emulator Core
//!
//! A cycle-counting NMOS 6502 emulator: it fetches, decodes and executes the
//! documented instruction set against a caller-supplied memory bus and
//! reproduces register, flag and cycle-count behavior, including the
//! page-crossing penalties, zero-page wraparound and the indirect-JMP page bug.
//!
//! ## Quick Start
//!
//! ```rust
//! use mpu6502::{FlatMemory, MemoryBus, MPU};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x1000, &[0x69, 0x12]); // ADC #$12
//!
//! let mut mpu = MPU::new(memory, 0x1000);
//! assert_eq!(mpu.decode(0x1000).unwrap().to_string(), "1000: ADC #$12");
//!
//! mpu.step().unwrap();
//! assert_eq!(mpu.a(), 0x12);
//! assert_eq!(mpu.pc(), 0x1002);
//! assert_eq!(mpu.elapsed_cycles(), 2);
//! assert_eq!(mpu.flags().to_string(), "nv-bdicz");
//! ```
//!
//! ## Modules
//!
//! - `cpu` - MPU state, fetch/decode/step and addressing-mode resolution
//! - `opcodes` - The 256-entry instruction table
//! - `addressing` - Addressing mode enumeration
//! - `disassembler` - Decoded instructions and their text form
//! - `flags` / `registers` - The register file
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `config` - Construction-time settings

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod disassembler;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

pub use addressing::AddressingMode;
pub use config::{MpuConfig, UnimplementedPolicy};
pub use cpu::MPU;
pub use disassembler::{disassemble, DecodedInstruction};
pub use flags::{Flag, Flags};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, InstructionTable, Operation, OPCODE_TABLE};
pub use registers::Registers;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the little-endian IRQ/BRK vector.
pub const IRQ_BRK_VECTOR: u16 = 0xFFFE;

/// Errors that can occur while decoding or executing instructions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The opcode has no registered handler and the MPU is configured with
    /// `UnimplementedPolicy::Fail`.
    #[error("opcode ${opcode:02X} at ${address:04X} is not implemented")]
    UnimplementedOpcode { opcode: u8, address: u16 },

    /// An instruction table entry claims a size outside 1..=3 bytes.
    #[error("opcode ${opcode:02X} has invalid instruction length {length}")]
    InvalidInstructionLength { opcode: u8, length: u8 },

    /// A handler asked for an address or value its addressing mode cannot supply.
    #[error("addressing mode {mode:?} is not supported by {mnemonic}")]
    UnsupportedAddressingMode {
        mnemonic: &'static str,
        mode: AddressingMode,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = ExecutionError> = std::result::Result<T, E>;
