//! Tests for the stack instructions (PHA, PHP, PLA, PLP) and the register
//! transfers (TAX, TAY, TXA, TYA, TSX, TXS).

use mpu6502::{Flag, Flags, FlatMemory, MemoryBus, MPU};

/// Helper function to create an MPU starting at 0x1000
fn setup_mpu() -> MPU<FlatMemory> {
    MPU::new(FlatMemory::new(), 0x1000)
}

fn run(mpu: &mut MPU<FlatMemory>, program: &[u8]) {
    mpu.memory_mut().load(0x1000, program);
    mpu.step().unwrap();
}

// ========== Stack ==========

#[test]
fn test_pha() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x42);

    run(&mut mpu, &[0x48]);

    assert_eq!(mpu.memory().read(0x01FF), 0x42);
    assert_eq!(mpu.sp(), 0xFE);
    assert_eq!(mpu.elapsed_cycles(), 3);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().load(0x1000, &[0x48, 0xA9, 0x00, 0x68]); // PHA; LDA #0; PLA
    mpu.set_a(0x80);

    for _ in 0..3 {
        mpu.step().unwrap();
    }

    assert_eq!(mpu.a(), 0x80);
    assert_eq!(mpu.sp(), 0xFF);
    assert!(mpu.flag(Flag::Negative));
    assert!(!mpu.flag(Flag::Zero));
    assert_eq!(mpu.elapsed_cycles(), 3 + 2 + 4);
}

#[test]
fn test_pla_sets_zero() {
    let mut mpu = setup_mpu();
    mpu.set_sp(0xFE);
    mpu.memory_mut().write(0x01FF, 0x00);
    mpu.set_a(0x12);

    run(&mut mpu, &[0x68]);

    assert_eq!(mpu.a(), 0x00);
    assert!(mpu.flag(Flag::Zero));
    assert_eq!(mpu.elapsed_cycles(), 4);
}

#[test]
fn test_php_forces_break_and_unused() {
    let mut mpu = setup_mpu();
    mpu.set_flags(Flags::from_bits(0x81));

    run(&mut mpu, &[0x08]);

    assert_eq!(mpu.memory().read(0x01FF), 0xB1);
    assert_eq!(mpu.flags().bits(), 0x81);
    assert_eq!(mpu.sp(), 0xFE);
    assert_eq!(mpu.elapsed_cycles(), 3);
}

#[test]
fn test_plp_restores_byte_unchanged() {
    let mut mpu = setup_mpu();
    mpu.set_sp(0xFE);
    mpu.memory_mut().write(0x01FF, 0xFF);

    run(&mut mpu, &[0x28]);

    assert_eq!(mpu.flags().bits(), 0xFF);
    assert_eq!(mpu.sp(), 0xFF);
    assert_eq!(mpu.elapsed_cycles(), 4);
}

#[test]
fn test_push_wraps_stack_pointer() {
    let mut mpu = setup_mpu();
    mpu.set_sp(0x00);
    mpu.set_a(0x5A);

    run(&mut mpu, &[0x48]);

    assert_eq!(mpu.memory().read(0x0100), 0x5A);
    assert_eq!(mpu.sp(), 0xFF);
}

#[test]
fn test_256_pushes_fill_stack_page() {
    let mut memory = FlatMemory::new();
    memory.load(0x1000, &[0x48; 256]);
    let mut mpu = MPU::new(memory, 0x1000);

    for index in 0..=0xFFu8 {
        mpu.set_a(index);
        mpu.step().unwrap();
    }

    assert_eq!(mpu.sp(), 0xFF);
    for index in 0..=0xFFu16 {
        assert_eq!(mpu.memory().read(0x0100 + index), 0xFF - index as u8);
    }
}

// ========== Transfers ==========

#[test]
fn test_tax() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x80);

    run(&mut mpu, &[0xAA]);

    assert_eq!(mpu.x(), 0x80);
    assert!(mpu.flag(Flag::Negative));
    assert_eq!(mpu.elapsed_cycles(), 2);
}

#[test]
fn test_tay_zero() {
    let mut mpu = setup_mpu();
    mpu.set_y(0x33);

    run(&mut mpu, &[0xA8]);

    assert_eq!(mpu.y(), 0x00);
    assert!(mpu.flag(Flag::Zero));
}

#[test]
fn test_txa() {
    let mut mpu = setup_mpu();
    mpu.set_x(0x12);

    run(&mut mpu, &[0x8A]);

    assert_eq!(mpu.a(), 0x12);
    assert!(!mpu.flag(Flag::Zero));
    assert!(!mpu.flag(Flag::Negative));
}

#[test]
fn test_tya() {
    let mut mpu = setup_mpu();
    mpu.set_y(0xF0);

    run(&mut mpu, &[0x98]);

    assert_eq!(mpu.a(), 0xF0);
    assert!(mpu.flag(Flag::Negative));
}

#[test]
fn test_tsx_sets_flags() {
    let mut mpu = setup_mpu();

    run(&mut mpu, &[0xBA]);

    assert_eq!(mpu.x(), 0xFF);
    assert!(mpu.flag(Flag::Negative));
}

#[test]
fn test_txs_leaves_flags_alone() {
    let mut mpu = setup_mpu();
    mpu.set_x(0x00);

    run(&mut mpu, &[0x9A]);

    assert_eq!(mpu.sp(), 0x00);
    assert!(!mpu.flag(Flag::Zero));
    assert_eq!(mpu.elapsed_cycles(), 2);
}
