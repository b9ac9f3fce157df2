//! # Instruction Table
//!
//! This module contains the 256-entry instruction table that serves as the
//! single source of truth for opcode metadata: mnemonic, addressing mode, size,
//! base cycle cost and the operation the MPU dispatches on.
//!
//! The table is built at compile time. Each documented opcode is registered
//! exactly once through `InstructionTable::register`; `finish` then fills every
//! remaining slot with the `"???"` placeholder. Registering the same opcode
//! twice fails const evaluation, so a corrupted table cannot build.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - `"???"`, mode None, 1 byte, 0 cycles

use crate::addressing::AddressingMode;

/// The semantic routine an opcode dispatches to.
///
/// One variant per documented 6502 instruction, plus `Unimplemented` for the
/// placeholder entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    Unimplemented,
}

impl Operation {
    /// Three-letter assembler mnemonic, `"???"` for unimplemented opcodes.
    pub const fn mnemonic(self) -> &'static str {
        use Operation::*;

        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Unimplemented => "???",
        }
    }

    /// Returns true for instructions that only read their operand and so pay
    /// the extra cycle when indexing crosses a page boundary.
    ///
    /// Stores and read-modify-write instructions always take their fixed
    /// (already worst-case) base cycle count.
    pub const fn pays_page_penalty(self) -> bool {
        use Operation::*;

        matches!(
            self,
            Adc | And | Cmp | Eor | Lda | Ldx | Ldy | Ora | Sbc
        )
    }
}

/// Static descriptor for a single opcode.
///
/// # Examples
///
/// ```
/// use mpu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Opcode byte this entry is stored under.
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Routine the MPU dispatches to.
    pub operation: Operation,
}

impl Instruction {
    /// The placeholder stored under every opcode without a registered handler.
    pub const fn unimplemented(opcode: u8) -> Self {
        Self {
            opcode,
            mnemonic: Operation::Unimplemented.mnemonic(),
            addressing_mode: AddressingMode::None,
            size_bytes: 1,
            base_cycles: 0,
            operation: Operation::Unimplemented,
        }
    }

    /// Returns true if a handler was registered for this opcode.
    pub const fn is_implemented(&self) -> bool {
        !matches!(self.operation, Operation::Unimplemented)
    }
}

/// Compile-time builder for the opcode table.
///
/// ```
/// use mpu6502::{AddressingMode, InstructionTable, Operation};
///
/// let table = InstructionTable::new()
///     .register(0xEA, Operation::Nop, AddressingMode::Implied, 1, 2)
///     .finish();
///
/// assert_eq!(table[0xEA].mnemonic, "NOP");
/// assert_eq!(table[0x02].mnemonic, "???");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InstructionTable {
    entries: [Option<Instruction>; 256],
}

impl InstructionTable {
    /// Creates a table with every slot empty.
    pub const fn new() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    /// Populates the slot for `opcode`.
    ///
    /// # Panics
    ///
    /// Panics (a compile error in const context) if the slot is already filled.
    pub const fn register(
        mut self,
        opcode: u8,
        operation: Operation,
        addressing_mode: AddressingMode,
        size_bytes: u8,
        base_cycles: u8,
    ) -> Self {
        if self.entries[opcode as usize].is_some() {
            panic!("opcode registered twice");
        }

        self.entries[opcode as usize] = Some(Instruction {
            opcode,
            mnemonic: operation.mnemonic(),
            addressing_mode,
            size_bytes,
            base_cycles,
            operation,
        });
        self
    }

    /// Fills every empty slot with the unimplemented placeholder.
    pub const fn finish(self) -> [Instruction; 256] {
        let mut table = [Instruction::unimplemented(0); 256];

        let mut opcode = 0;
        while opcode < 256 {
            table[opcode] = match self.entries[opcode] {
                Some(instruction) => instruction,
                None => Instruction::unimplemented(opcode as u8),
            };
            opcode += 1;
        }

        table
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete 256-entry instruction table indexed by opcode byte value.
///
/// ```
/// use mpu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!((brk.mnemonic, brk.base_cycles, brk.size_bytes), ("BRK", 7, 1));
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert_eq!(illegal.base_cycles, 0);
/// ```
pub static OPCODE_TABLE: [Instruction; 256] = build_opcode_table();

const fn build_opcode_table() -> [Instruction; 256] {
    use AddressingMode::{
        Absolute, AbsoluteX, AbsoluteY, Accumulator, Branch, Immediate, Implied, Indirect,
        IndirectX, IndirectY, ZeroPage, ZeroPageX, ZeroPageY,
    };
    use Operation::*;

    InstructionTable::new()
        // ADC
        .register(0x69, Adc, Immediate, 2, 2)
        .register(0x65, Adc, ZeroPage, 2, 3)
        .register(0x75, Adc, ZeroPageX, 2, 4)
        .register(0x6D, Adc, Absolute, 3, 4)
        .register(0x7D, Adc, AbsoluteX, 3, 4)
        .register(0x79, Adc, AbsoluteY, 3, 4)
        .register(0x61, Adc, IndirectX, 2, 6)
        .register(0x71, Adc, IndirectY, 2, 5)
        // AND
        .register(0x29, And, Immediate, 2, 2)
        .register(0x25, And, ZeroPage, 2, 3)
        .register(0x35, And, ZeroPageX, 2, 4)
        .register(0x2D, And, Absolute, 3, 4)
        .register(0x3D, And, AbsoluteX, 3, 4)
        .register(0x39, And, AbsoluteY, 3, 4)
        .register(0x21, And, IndirectX, 2, 6)
        .register(0x31, And, IndirectY, 2, 5)
        // ASL
        .register(0x0A, Asl, Accumulator, 1, 2)
        .register(0x06, Asl, ZeroPage, 2, 5)
        .register(0x16, Asl, ZeroPageX, 2, 6)
        .register(0x0E, Asl, Absolute, 3, 6)
        .register(0x1E, Asl, AbsoluteX, 3, 7)
        // Branches
        .register(0x10, Bpl, Branch, 2, 2)
        .register(0x30, Bmi, Branch, 2, 2)
        .register(0x50, Bvc, Branch, 2, 2)
        .register(0x70, Bvs, Branch, 2, 2)
        .register(0x90, Bcc, Branch, 2, 2)
        .register(0xB0, Bcs, Branch, 2, 2)
        .register(0xD0, Bne, Branch, 2, 2)
        .register(0xF0, Beq, Branch, 2, 2)
        // BIT
        .register(0x24, Bit, ZeroPage, 2, 3)
        .register(0x2C, Bit, Absolute, 3, 4)
        // BRK
        .register(0x00, Brk, Implied, 1, 7)
        // Flag instructions
        .register(0x18, Clc, Implied, 1, 2)
        .register(0x38, Sec, Implied, 1, 2)
        .register(0x58, Cli, Implied, 1, 2)
        .register(0x78, Sei, Implied, 1, 2)
        .register(0xB8, Clv, Implied, 1, 2)
        .register(0xD8, Cld, Implied, 1, 2)
        .register(0xF8, Sed, Implied, 1, 2)
        // CMP
        .register(0xC9, Cmp, Immediate, 2, 2)
        .register(0xC5, Cmp, ZeroPage, 2, 3)
        .register(0xD5, Cmp, ZeroPageX, 2, 4)
        .register(0xCD, Cmp, Absolute, 3, 4)
        .register(0xDD, Cmp, AbsoluteX, 3, 4)
        .register(0xD9, Cmp, AbsoluteY, 3, 4)
        .register(0xC1, Cmp, IndirectX, 2, 6)
        .register(0xD1, Cmp, IndirectY, 2, 5)
        // CPX
        .register(0xE0, Cpx, Immediate, 2, 2)
        .register(0xE4, Cpx, ZeroPage, 2, 3)
        .register(0xEC, Cpx, Absolute, 3, 4)
        // CPY
        .register(0xC0, Cpy, Immediate, 2, 2)
        .register(0xC4, Cpy, ZeroPage, 2, 3)
        .register(0xCC, Cpy, Absolute, 3, 4)
        // DEC
        .register(0xC6, Dec, ZeroPage, 2, 5)
        .register(0xD6, Dec, ZeroPageX, 2, 6)
        .register(0xCE, Dec, Absolute, 3, 6)
        .register(0xDE, Dec, AbsoluteX, 3, 7)
        // DEX, DEY
        .register(0xCA, Dex, Implied, 1, 2)
        .register(0x88, Dey, Implied, 1, 2)
        // EOR
        .register(0x49, Eor, Immediate, 2, 2)
        .register(0x45, Eor, ZeroPage, 2, 3)
        .register(0x55, Eor, ZeroPageX, 2, 4)
        .register(0x4D, Eor, Absolute, 3, 4)
        .register(0x5D, Eor, AbsoluteX, 3, 4)
        .register(0x59, Eor, AbsoluteY, 3, 4)
        .register(0x41, Eor, IndirectX, 2, 6)
        .register(0x51, Eor, IndirectY, 2, 5)
        // INC
        .register(0xE6, Inc, ZeroPage, 2, 5)
        .register(0xF6, Inc, ZeroPageX, 2, 6)
        .register(0xEE, Inc, Absolute, 3, 6)
        .register(0xFE, Inc, AbsoluteX, 3, 7)
        // INX, INY
        .register(0xE8, Inx, Implied, 1, 2)
        .register(0xC8, Iny, Implied, 1, 2)
        // JMP, JSR
        .register(0x4C, Jmp, Absolute, 3, 3)
        .register(0x6C, Jmp, Indirect, 3, 5)
        .register(0x20, Jsr, Absolute, 3, 6)
        // LDA
        .register(0xA9, Lda, Immediate, 2, 2)
        .register(0xA5, Lda, ZeroPage, 2, 3)
        .register(0xB5, Lda, ZeroPageX, 2, 4)
        .register(0xAD, Lda, Absolute, 3, 4)
        .register(0xBD, Lda, AbsoluteX, 3, 4)
        .register(0xB9, Lda, AbsoluteY, 3, 4)
        .register(0xA1, Lda, IndirectX, 2, 6)
        .register(0xB1, Lda, IndirectY, 2, 5)
        // LDX
        .register(0xA2, Ldx, Immediate, 2, 2)
        .register(0xA6, Ldx, ZeroPage, 2, 3)
        .register(0xB6, Ldx, ZeroPageY, 2, 4)
        .register(0xAE, Ldx, Absolute, 3, 4)
        .register(0xBE, Ldx, AbsoluteY, 3, 4)
        // LDY
        .register(0xA0, Ldy, Immediate, 2, 2)
        .register(0xA4, Ldy, ZeroPage, 2, 3)
        .register(0xB4, Ldy, ZeroPageX, 2, 4)
        .register(0xAC, Ldy, Absolute, 3, 4)
        .register(0xBC, Ldy, AbsoluteX, 3, 4)
        // LSR
        .register(0x4A, Lsr, Accumulator, 1, 2)
        .register(0x46, Lsr, ZeroPage, 2, 5)
        .register(0x56, Lsr, ZeroPageX, 2, 6)
        .register(0x4E, Lsr, Absolute, 3, 6)
        .register(0x5E, Lsr, AbsoluteX, 3, 7)
        // NOP
        .register(0xEA, Nop, Implied, 1, 2)
        // ORA
        .register(0x09, Ora, Immediate, 2, 2)
        .register(0x05, Ora, ZeroPage, 2, 3)
        .register(0x15, Ora, ZeroPageX, 2, 4)
        .register(0x0D, Ora, Absolute, 3, 4)
        .register(0x1D, Ora, AbsoluteX, 3, 4)
        .register(0x19, Ora, AbsoluteY, 3, 4)
        .register(0x01, Ora, IndirectX, 2, 6)
        .register(0x11, Ora, IndirectY, 2, 5)
        // Stack
        .register(0x48, Pha, Implied, 1, 3)
        .register(0x08, Php, Implied, 1, 3)
        .register(0x68, Pla, Implied, 1, 4)
        .register(0x28, Plp, Implied, 1, 4)
        // ROL
        .register(0x2A, Rol, Accumulator, 1, 2)
        .register(0x26, Rol, ZeroPage, 2, 5)
        .register(0x36, Rol, ZeroPageX, 2, 6)
        .register(0x2E, Rol, Absolute, 3, 6)
        .register(0x3E, Rol, AbsoluteX, 3, 7)
        // ROR
        .register(0x6A, Ror, Accumulator, 1, 2)
        .register(0x66, Ror, ZeroPage, 2, 5)
        .register(0x76, Ror, ZeroPageX, 2, 6)
        .register(0x6E, Ror, Absolute, 3, 6)
        .register(0x7E, Ror, AbsoluteX, 3, 7)
        // RTI, RTS
        .register(0x40, Rti, Implied, 1, 6)
        .register(0x60, Rts, Implied, 1, 6)
        // SBC
        .register(0xE9, Sbc, Immediate, 2, 2)
        .register(0xE5, Sbc, ZeroPage, 2, 3)
        .register(0xF5, Sbc, ZeroPageX, 2, 4)
        .register(0xED, Sbc, Absolute, 3, 4)
        .register(0xFD, Sbc, AbsoluteX, 3, 4)
        .register(0xF9, Sbc, AbsoluteY, 3, 4)
        .register(0xE1, Sbc, IndirectX, 2, 6)
        .register(0xF1, Sbc, IndirectY, 2, 5)
        // STA
        .register(0x85, Sta, ZeroPage, 2, 3)
        .register(0x95, Sta, ZeroPageX, 2, 4)
        .register(0x8D, Sta, Absolute, 3, 4)
        .register(0x9D, Sta, AbsoluteX, 3, 5)
        .register(0x99, Sta, AbsoluteY, 3, 5)
        .register(0x81, Sta, IndirectX, 2, 6)
        .register(0x91, Sta, IndirectY, 2, 6)
        // STX
        .register(0x86, Stx, ZeroPage, 2, 3)
        .register(0x96, Stx, ZeroPageY, 2, 4)
        .register(0x8E, Stx, Absolute, 3, 4)
        // STY
        .register(0x84, Sty, ZeroPage, 2, 3)
        .register(0x94, Sty, ZeroPageX, 2, 4)
        .register(0x8C, Sty, Absolute, 3, 4)
        // Transfers
        .register(0xAA, Tax, Implied, 1, 2)
        .register(0xA8, Tay, Implied, 1, 2)
        .register(0xBA, Tsx, Implied, 1, 2)
        .register(0x8A, Txa, Implied, 1, 2)
        .register(0x9A, Txs, Implied, 1, 2)
        .register(0x98, Tya, Implied, 1, 2)
        .finish()
}
