//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the MPU and the decoded instruction. The PC has already been advanced past the
//! instruction and cycles are accounted by the caller, so handlers only touch registers,
//! flags, memory and `extra_cycles`.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::AddressingMode;
use crate::flags::Flag;
use crate::opcodes::Operation;
use crate::{DecodedInstruction, ExecutionError, MemoryBus, MPU};

/// Runs the handler for `instruction`'s operation.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
) -> Result<(), ExecutionError> {
    use Operation::*;

    match instruction.operation() {
        Adc => alu::execute_adc(cpu, instruction),
        Sbc => alu::execute_sbc(cpu, instruction),
        And => alu::execute_and(cpu, instruction),
        Ora => alu::execute_ora(cpu, instruction),
        Eor => alu::execute_eor(cpu, instruction),
        Bit => alu::execute_bit(cpu, instruction),
        Cmp => alu::execute_cmp(cpu, instruction),
        Cpx => alu::execute_cpx(cpu, instruction),
        Cpy => alu::execute_cpy(cpu, instruction),

        Bcc => branches::branch_if(cpu, instruction, Flag::Carry, false),
        Bcs => branches::branch_if(cpu, instruction, Flag::Carry, true),
        Bne => branches::branch_if(cpu, instruction, Flag::Zero, false),
        Beq => branches::branch_if(cpu, instruction, Flag::Zero, true),
        Bpl => branches::branch_if(cpu, instruction, Flag::Negative, false),
        Bmi => branches::branch_if(cpu, instruction, Flag::Negative, true),
        Bvc => branches::branch_if(cpu, instruction, Flag::Overflow, false),
        Bvs => branches::branch_if(cpu, instruction, Flag::Overflow, true),

        Asl => shifts::execute_asl(cpu, instruction),
        Lsr => shifts::execute_lsr(cpu, instruction),
        Rol => shifts::execute_rol(cpu, instruction),
        Ror => shifts::execute_ror(cpu, instruction),

        Lda => load_store::execute_lda(cpu, instruction),
        Ldx => load_store::execute_ldx(cpu, instruction),
        Ldy => load_store::execute_ldy(cpu, instruction),
        Sta => load_store::execute_sta(cpu, instruction),
        Stx => load_store::execute_stx(cpu, instruction),
        Sty => load_store::execute_sty(cpu, instruction),

        Inc => inc_dec::execute_inc(cpu, instruction),
        Dec => inc_dec::execute_dec(cpu, instruction),
        Inx => inc_dec::execute_inx(cpu, instruction),
        Iny => inc_dec::execute_iny(cpu, instruction),
        Dex => inc_dec::execute_dex(cpu, instruction),
        Dey => inc_dec::execute_dey(cpu, instruction),

        Jmp => control::execute_jmp(cpu, instruction),
        Jsr => control::execute_jsr(cpu, instruction),
        Rts => control::execute_rts(cpu, instruction),
        Rti => control::execute_rti(cpu, instruction),
        Brk => control::execute_brk(cpu, instruction),
        Nop | Unimplemented => Ok(()),

        Pha => stack::execute_pha(cpu, instruction),
        Php => stack::execute_php(cpu, instruction),
        Pla => stack::execute_pla(cpu, instruction),
        Plp => stack::execute_plp(cpu, instruction),

        Clc => flags::execute_clc(cpu, instruction),
        Sec => flags::execute_sec(cpu, instruction),
        Cli => flags::execute_cli(cpu, instruction),
        Sei => flags::execute_sei(cpu, instruction),
        Cld => flags::execute_cld(cpu, instruction),
        Sed => flags::execute_sed(cpu, instruction),
        Clv => flags::execute_clv(cpu, instruction),

        Tax => transfer::execute_tax(cpu, instruction),
        Tay => transfer::execute_tay(cpu, instruction),
        Txa => transfer::execute_txa(cpu, instruction),
        Tya => transfer::execute_tya(cpu, instruction),
        Tsx => transfer::execute_tsx(cpu, instruction),
        Txs => transfer::execute_txs(cpu, instruction),
    }
}

/// Applies `op` to the accumulator or to the byte at the effective address,
/// writes the result back and returns it.
///
/// Shared by ASL/LSR/ROL/ROR (which also run in Accumulator mode) and INC/DEC.
pub(crate) fn read_modify_write<M, F>(
    cpu: &mut MPU<M>,
    instruction: &mut DecodedInstruction,
    op: F,
) -> Result<u8, ExecutionError>
where
    M: MemoryBus,
    F: FnOnce(&mut MPU<M>, u8) -> u8,
{
    if instruction.addressing_mode() == AddressingMode::Accumulator {
        let value = cpu.registers.a;
        let result = op(cpu, value);
        cpu.registers.a = result;
        return Ok(result);
    }

    let address = cpu.required_address(instruction)?;
    let value = cpu.read_byte(address);
    let result = op(cpu, value);
    cpu.write_byte(address, result);
    Ok(result)
}
