//! # MPU State and Execution
//!
//! This module contains the `MPU` struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## MPU State
//!
//! The MPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: a single `Flags` byte
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! `step()` decodes the instruction at PC, advances PC past it *before*
//! running the handler (branches, JSR and BRK compute from the advanced PC),
//! dispatches on the table entry, then adds base plus extra cycles to the
//! counter. A step never suspends; on error the step is abandoned.

use tracing::{debug, trace, warn};

use crate::addressing::AddressingMode;
use crate::config::{MpuConfig, UnimplementedPolicy};
use crate::disassembler::{self, DecodedInstruction};
use crate::flags::{Flag, Flags};
use crate::instructions;
use crate::memory::MemoryBus;
use crate::registers::Registers;
use crate::{ExecutionError, Result, STACK_BASE};

/// 6502 MPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The MPU
/// owns its memory for its whole lifetime; use `memory_mut()` to load
/// programs and `into_memory()` to take it back.
///
/// # Examples
///
/// ```
/// use mpu6502::{FlatMemory, MemoryBus, MPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut mpu = MPU::new(memory, 0x8000);
/// assert_eq!(mpu.sp(), 0xFF);
///
/// mpu.step().unwrap();
/// assert_eq!(mpu.a(), 0x42);
/// assert_eq!(mpu.elapsed_cycles(), 2);
/// ```
pub struct MPU<M: MemoryBus> {
    /// Register file
    pub(crate) registers: Registers,

    /// Total cycles executed since construction
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    config: MpuConfig,
}

impl<M: MemoryBus> MPU<M> {
    /// Creates a new MPU starting at `pc` and performs a reset.
    pub fn new(memory: M, pc: u16) -> Self {
        Self::with_config(memory, MpuConfig::default().with_start_pc(pc))
    }

    /// Creates a new MPU from an explicit configuration and performs a reset.
    pub fn with_config(memory: M, config: MpuConfig) -> Self {
        let mut mpu = Self {
            registers: Registers::default(),
            cycles: 0,
            memory,
            config,
        };
        mpu.reset();
        mpu
    }

    /// Resets the MPU.
    ///
    /// PC is loaded with the configured start address, SP is set to 0xFF
    /// (top of the stack page), and A, X, Y and all flags are cleared. The
    /// cycle counter keeps counting.
    pub fn reset(&mut self) {
        self.registers = Registers {
            pc: self.config.start_pc,
            sp: 0xFF,
            ..Registers::default()
        };
        debug!(pc = self.registers.pc, "mpu reset");
    }

    /// Decodes the instruction at `address` without changing any state.
    pub fn decode(&self, address: u16) -> Result<DecodedInstruction> {
        disassembler::decode(&self.memory, address)
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// - `UnimplementedOpcode` if the opcode has no handler and the policy is
    ///   `UnimplementedPolicy::Fail`; the MPU state is left untouched.
    /// - `UnsupportedAddressingMode` / `InvalidInstructionLength` if the
    ///   instruction table is inconsistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu6502::{ExecutionError, FlatMemory, MemoryBus, MPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0xEA, 0x02]); // NOP, illegal opcode
    ///
    /// let mut mpu = MPU::new(mem, 0x8000);
    /// assert!(mpu.step().is_ok());
    /// assert_eq!(
    ///     mpu.step(),
    ///     Err(ExecutionError::UnimplementedOpcode { opcode: 0x02, address: 0x8001 })
    /// );
    /// assert_eq!(mpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<()> {
        let mut instruction = self.decode(self.registers.pc)?;

        if !instruction.instruction.is_implemented() {
            match self.config.unimplemented {
                UnimplementedPolicy::Fail => {
                    return Err(ExecutionError::UnimplementedOpcode {
                        opcode: instruction.opcode(),
                        address: instruction.address,
                    });
                }
                UnimplementedPolicy::Ignore => {
                    warn!(
                        opcode = instruction.opcode(),
                        address = instruction.address,
                        "skipping unimplemented opcode"
                    );
                }
            }
        }

        self.registers.pc = self
            .registers
            .pc
            .wrapping_add(instruction.size_bytes() as u16);

        instructions::execute(self, &mut instruction)?;

        let spent = instruction.total_cycles();
        self.cycles += spent;
        trace!(cycles = spent, "{}", instruction);

        Ok(())
    }

    /// Runs the MPU until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the number of cycles actually consumed, which may exceed the
    /// budget by up to one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu6502::{FlatMemory, MemoryBus, MPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x8000, &[0xEA; 16]); // NOPs, 2 cycles each
    ///
    /// let mut mpu = MPU::new(mem, 0x8000);
    /// assert_eq!(mpu.run_for_cycles(10).unwrap(), 10);
    /// assert_eq!(mpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            let before = self.cycles;
            self.step()?;

            // Only a skipped unimplemented opcode costs zero cycles
            if self.cycles == before {
                break;
            }
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Addressing Mode Resolution ==========

    /// Resolves the effective address of `instruction`.
    ///
    /// Returns `None` for modes without an address (None, Implied,
    /// Accumulator, Immediate, Branch). Indexed modes that cross a page add
    /// one extra cycle to `instruction` for operations that pay the penalty.
    ///
    /// | Mode | Address |
    /// |---|---|
    /// | ZeroPage | operand & 0xFF |
    /// | ZeroPageX/Y | (operand + X/Y) & 0xFF |
    /// | Absolute | operand |
    /// | AbsoluteX/Y | (operand + X/Y) & 0xFFFF |
    /// | Indirect | word at operand, high byte from the same page |
    /// | IndirectX | word at zero page (operand + X) & 0xFF |
    /// | IndirectY | word at zero page operand, + Y |
    pub fn effective_address(&self, instruction: &mut DecodedInstruction) -> Option<u16> {
        use AddressingMode::*;

        let operand = instruction.operand;
        let x = self.registers.x;
        let y = self.registers.y;

        let address = match instruction.addressing_mode() {
            None | Implied | Accumulator | Immediate | Branch => return Option::None,
            ZeroPage => operand & 0xFF,
            ZeroPageX => (operand as u8).wrapping_add(x) as u16,
            ZeroPageY => (operand as u8).wrapping_add(y) as u16,
            Absolute => operand,
            AbsoluteX => {
                self.page_penalty(instruction, operand, x);
                operand.wrapping_add(x as u16)
            }
            AbsoluteY => {
                self.page_penalty(instruction, operand, y);
                operand.wrapping_add(y as u16)
            }
            Indirect => {
                // NMOS bug: the pointer's high byte never leaves its page
                let high_address = (operand & 0xFF00) | (operand.wrapping_add(1) & 0x00FF);
                u16::from_le_bytes([self.read_byte(operand), self.read_byte(high_address)])
            }
            IndirectX => self.read_word_zero_page((operand as u8).wrapping_add(x)),
            IndirectY => {
                let base = self.read_word_zero_page(operand as u8);
                self.page_penalty(instruction, base, y);
                base.wrapping_add(y as u16)
            }
        };

        Some(address)
    }

    /// Resolves the value an instruction operates on.
    ///
    /// - Accumulator: the A register
    /// - Immediate, Branch: the raw operand
    /// - Indirect: the effective address itself (JMP target)
    /// - Every other addressed mode: the byte at the effective address
    ///
    /// # Errors
    ///
    /// `UnsupportedAddressingMode` for None and Implied.
    pub fn decoded_value(&self, instruction: &mut DecodedInstruction) -> Result<u16> {
        match instruction.addressing_mode() {
            AddressingMode::Accumulator => Ok(self.registers.a as u16),
            AddressingMode::Immediate | AddressingMode::Branch => Ok(instruction.operand),
            AddressingMode::Indirect => self.required_address(instruction),
            _ => {
                let address = self.required_address(instruction)?;
                Ok(self.read_byte(address) as u16)
            }
        }
    }

    /// `decoded_value` narrowed to the 8-bit operand of ALU and load instructions.
    pub(crate) fn operand_byte(&self, instruction: &mut DecodedInstruction) -> Result<u8> {
        self.decoded_value(instruction).map(|value| value as u8)
    }

    /// `effective_address`, failing for modes without an address.
    pub(crate) fn required_address(&self, instruction: &mut DecodedInstruction) -> Result<u16> {
        self.effective_address(instruction)
            .ok_or(ExecutionError::UnsupportedAddressingMode {
                mnemonic: instruction.mnemonic(),
                mode: instruction.addressing_mode(),
            })
    }

    fn page_penalty(&self, instruction: &mut DecodedInstruction, base: u16, index: u8) {
        if instruction.operation().pays_page_penalty() && (base & 0x00FF) + index as u16 > 0xFF {
            instruction.extra_cycles += 1;
            debug!(base, index, "page crossing penalty");
        }
    }

    // ========== Memory Primitives ==========

    pub(crate) fn read_byte(&self, address: u16) -> u8 {
        self.memory.read(address)
    }

    pub(crate) fn write_byte(&mut self, address: u16, value: u8) {
        self.memory.write(address, value);
    }

    /// Little-endian word, wrapping at 0xFFFF.
    pub(crate) fn read_word(&self, address: u16) -> u16 {
        u16::from_le_bytes([self.read_byte(address), self.read_byte(address.wrapping_add(1))])
    }

    /// Little-endian word in zero page, wrapping at 0x00FF.
    pub(crate) fn read_word_zero_page(&self, address: u8) -> u16 {
        u16::from_le_bytes([
            self.read_byte(address as u16),
            self.read_byte(address.wrapping_add(1) as u16),
        ])
    }

    // ========== Stack Primitives ==========

    /// Writes to `STACK_BASE + SP`, then decrements SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.write_byte(STACK_BASE | self.registers.sp as u16, value);
        self.registers.sp = self.registers.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads `STACK_BASE + SP`.
    pub(crate) fn pop(&mut self) -> u8 {
        self.registers.sp = self.registers.sp.wrapping_add(1);
        self.read_byte(STACK_BASE | self.registers.sp as u16)
    }

    /// Pushes the high byte first, then the low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push(high);
        self.push(low);
    }

    /// Pops the low byte first, then the high byte.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let low = self.pop();
        let high = self.pop();
        u16::from_le_bytes([low, high])
    }

    // ========== Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.registers.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.registers.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.registers.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.registers.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.registers.sp
    }

    /// Returns the status register.
    pub fn flags(&self) -> Flags {
        self.registers.flags
    }

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.registers.flags.contains(flag)
    }

    /// Total cycles executed since construction.
    pub fn elapsed_cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the configuration the MPU was built with.
    pub fn config(&self) -> &MpuConfig {
        &self.config
    }

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Returns the register file for direct modification.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the MPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.registers.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.registers.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.registers.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.registers.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.registers.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_flags(&mut self, flags: Flags) {
        self.registers.flags = flags;
    }

    /// Sets or clears a single flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.registers.flags.modify(flag, value);
    }
}
