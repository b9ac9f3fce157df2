//! Tests for ASL, LSR, ROL and ROR on the accumulator and on memory.

use mpu6502::{Flag, FlatMemory, MemoryBus, MPU};

/// Helper function to create an MPU starting at 0x1000
fn setup_mpu() -> MPU<FlatMemory> {
    MPU::new(FlatMemory::new(), 0x1000)
}

fn run(mpu: &mut MPU<FlatMemory>, program: &[u8]) {
    mpu.memory_mut().load(0x1000, program);
    mpu.step().unwrap();
}

#[test]
fn test_asl_accumulator() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x81);

    run(&mut mpu, &[0x0A]);

    assert_eq!(mpu.a(), 0x02);
    assert!(mpu.flag(Flag::Carry));
    assert!(!mpu.flag(Flag::Negative));
    assert_eq!(mpu.pc(), 0x1001);
    assert_eq!(mpu.elapsed_cycles(), 2);
}

#[test]
fn test_asl_shifts_in_zero_regardless_of_carry() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x01);
    mpu.set_flag(Flag::Carry, true);

    run(&mut mpu, &[0x0A]);

    assert_eq!(mpu.a(), 0x02);
    assert!(!mpu.flag(Flag::Carry));
}

#[test]
fn test_asl_zero_page() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x0010, 0x40);

    run(&mut mpu, &[0x06, 0x10]);

    assert_eq!(mpu.memory().read(0x0010), 0x80);
    assert!(mpu.flag(Flag::Negative));
    assert!(!mpu.flag(Flag::Carry));
    assert_eq!(mpu.elapsed_cycles(), 5);
}

#[test]
fn test_asl_absolute_x_fixed_cycles() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x2005, 0x80);
    mpu.set_x(0x05);

    run(&mut mpu, &[0x1E, 0x00, 0x20]);

    assert_eq!(mpu.memory().read(0x2005), 0x00);
    assert!(mpu.flag(Flag::Zero));
    assert!(mpu.flag(Flag::Carry));
    assert_eq!(mpu.elapsed_cycles(), 7);
}

#[test]
fn test_lsr_accumulator() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x01);

    run(&mut mpu, &[0x4A]);

    assert_eq!(mpu.a(), 0x00);
    assert!(mpu.flag(Flag::Carry));
    assert!(mpu.flag(Flag::Zero));
    assert!(!mpu.flag(Flag::Negative));
}

#[test]
fn test_lsr_absolute() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x3000, 0xFE);

    run(&mut mpu, &[0x4E, 0x00, 0x30]);

    assert_eq!(mpu.memory().read(0x3000), 0x7F);
    assert!(!mpu.flag(Flag::Carry));
    assert_eq!(mpu.elapsed_cycles(), 6);
}

#[test]
fn test_lsr_clears_negative_even_with_carry_set() {
    let mut mpu = setup_mpu();
    mpu.set_a(0xFF);
    mpu.set_flag(Flag::Carry, true);
    mpu.set_flag(Flag::Negative, true);

    run(&mut mpu, &[0x4A]);

    assert_eq!(mpu.a(), 0x7F);
    assert!(mpu.flag(Flag::Carry));
    assert!(!mpu.flag(Flag::Negative));
    assert!(!mpu.flag(Flag::Zero));
}

#[test]
fn test_rol_accumulator_rotates_carry_in() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x80);
    mpu.set_flag(Flag::Carry, true);

    run(&mut mpu, &[0x2A]);

    assert_eq!(mpu.a(), 0x01);
    assert!(mpu.flag(Flag::Carry));
    assert!(!mpu.flag(Flag::Zero));
}

#[test]
fn test_rol_zero_page_x() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x0001, 0x40);
    mpu.set_x(0x02);

    run(&mut mpu, &[0x36, 0xFF]);

    assert_eq!(mpu.memory().read(0x0001), 0x80);
    assert!(mpu.flag(Flag::Negative));
    assert_eq!(mpu.elapsed_cycles(), 6);
}

#[test]
fn test_ror_accumulator_rotates_carry_in() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x01);
    mpu.set_flag(Flag::Carry, true);

    run(&mut mpu, &[0x6A]);

    assert_eq!(mpu.a(), 0x80);
    assert!(mpu.flag(Flag::Carry));
    assert!(mpu.flag(Flag::Negative));
}

#[test]
fn test_ror_absolute_x_page_crossing_has_no_penalty() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x2100, 0x02);
    mpu.set_x(0x01);

    run(&mut mpu, &[0x7E, 0xFF, 0x20]);

    assert_eq!(mpu.memory().read(0x2100), 0x01);
    assert!(!mpu.flag(Flag::Carry));
    assert_eq!(mpu.elapsed_cycles(), 7);
}
