//! Tests for the single-flag instructions (SEC, CLC, SED, CLD, SEI, CLI, CLV).

use mpu6502::{Flag, Flags, FlatMemory, MemoryBus, MPU};

fn run_from(flags: u8, opcode: u8) -> MPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0x1000, opcode);
    let mut mpu = MPU::new(memory, 0x1000);
    mpu.set_flags(Flags::from_bits(flags));
    mpu.step().unwrap();
    mpu
}

#[test]
fn test_set_instructions_touch_only_their_flag() {
    for (opcode, flag) in [
        (0x38, Flag::Carry),
        (0xF8, Flag::Decimal),
        (0x78, Flag::Interrupt),
    ] {
        let mpu = run_from(0x00, opcode);
        assert_eq!(mpu.flags().bits(), flag.mask(), "opcode {:02X}", opcode);
        assert_eq!(mpu.elapsed_cycles(), 2);
        assert_eq!(mpu.pc(), 0x1001);
    }
}

#[test]
fn test_clear_instructions_touch_only_their_flag() {
    for (opcode, flag) in [
        (0x18, Flag::Carry),
        (0xD8, Flag::Decimal),
        (0x58, Flag::Interrupt),
        (0xB8, Flag::Overflow),
    ] {
        let mpu = run_from(0xFF, opcode);
        assert_eq!(mpu.flags().bits(), !flag.mask(), "opcode {:02X}", opcode);
        assert_eq!(mpu.elapsed_cycles(), 2);
    }
}

#[test]
fn test_set_is_idempotent() {
    let mpu = run_from(0x01, 0x38);
    assert!(mpu.flag(Flag::Carry));
    assert_eq!(mpu.flags().to_string(), "nv-bdiCz");
}
