//! Fuzz target for MPU step execution.
//!
//! Builds an arbitrary register file and memory image, then runs a short
//! burst of instructions looking for panics or broken accounting.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mpu6502::{
    Flags, FlatMemory, MemoryBus, MpuConfig, UnimplementedPolicy, IRQ_BRK_VECTOR, MPU,
    OPCODE_TABLE,
};

/// Arbitrary MPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    flags: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction stream at the start address
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data reachable through absolute addressing at 0x4000
    data: [u8; 256],
    brk_vector: u16,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
    ignore_unimplemented: bool,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.data);
    memory.load(0x8000, &input.memory.program);
    memory.load(IRQ_BRK_VECTOR, &input.memory.brk_vector.to_le_bytes());

    let policy = if input.ignore_unimplemented {
        UnimplementedPolicy::Ignore
    } else {
        UnimplementedPolicy::Fail
    };
    let config = MpuConfig::default()
        .with_start_pc(0x8000)
        .with_unimplemented(policy);
    let mut mpu = MPU::with_config(memory, config);

    mpu.set_a(input.registers.a);
    mpu.set_x(input.registers.x);
    mpu.set_y(input.registers.y);
    mpu.set_sp(input.registers.sp);
    mpu.set_flags(Flags::from_bits(input.registers.flags));

    for _ in 0..input.steps % 32 {
        let pc = mpu.pc();
        let opcode = mpu.memory().read(pc);
        let before = mpu.elapsed_cycles();

        match mpu.step() {
            Ok(()) => {
                let spent = mpu.elapsed_cycles() - before;
                let base = OPCODE_TABLE[opcode as usize].base_cycles as u64;
                // Page crossing and taken branches add at most two cycles
                assert!(spent >= base && spent <= base + 2);
            }
            Err(_) => {
                assert_eq!(mpu.pc(), pc);
                assert_eq!(mpu.elapsed_cycles(), before);
                break;
            }
        }
    }
});
