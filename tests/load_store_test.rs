//! Tests for LDA, LDX, LDY, STA, STX and STY across addressing modes.

use mpu6502::{Flag, Flags, FlatMemory, MemoryBus, MPU};

/// Helper function to create an MPU starting at 0x1000
fn setup_mpu() -> MPU<FlatMemory> {
    MPU::new(FlatMemory::new(), 0x1000)
}

fn run(mpu: &mut MPU<FlatMemory>, program: &[u8]) {
    mpu.memory_mut().load(0x1000, program);
    mpu.step().unwrap();
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_zero() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x55);

    run(&mut mpu, &[0xA9, 0x00]);

    assert_eq!(mpu.a(), 0x00);
    assert!(mpu.flag(Flag::Zero));
    assert!(!mpu.flag(Flag::Negative));
    assert_eq!(mpu.elapsed_cycles(), 2);
}

#[test]
fn test_lda_immediate_negative() {
    let mut mpu = setup_mpu();

    run(&mut mpu, &[0xA9, 0x80]);

    assert_eq!(mpu.a(), 0x80);
    assert!(mpu.flag(Flag::Negative));
    assert!(!mpu.flag(Flag::Zero));
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x0000, 0x42);
    mpu.memory_mut().write(0x0100, 0x99);
    mpu.set_x(0x01);

    run(&mut mpu, &[0xB5, 0xFF]);

    assert_eq!(mpu.a(), 0x42);
    assert_eq!(mpu.elapsed_cycles(), 4);
}

#[test]
fn test_lda_absolute() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x1234, 0x77);

    run(&mut mpu, &[0xAD, 0x34, 0x12]);

    assert_eq!(mpu.a(), 0x77);
    assert_eq!(mpu.pc(), 0x1003);
    assert_eq!(mpu.elapsed_cycles(), 4);
}

#[test]
fn test_lda_absolute_x_wraps_address_space() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x0001, 0x5A);
    mpu.set_x(0x02);

    run(&mut mpu, &[0xBD, 0xFF, 0xFF]);

    assert_eq!(mpu.a(), 0x5A);
    assert_eq!(mpu.elapsed_cycles(), 5);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x00FF, 0x00);
    mpu.memory_mut().write(0x0000, 0x20);
    mpu.memory_mut().write(0x2000, 0x3C);
    mpu.set_x(0x01);

    run(&mut mpu, &[0xA1, 0xFE]);

    assert_eq!(mpu.a(), 0x3C);
    assert_eq!(mpu.elapsed_cycles(), 6);
}

#[test]
fn test_lda_indirect_y_page_crossing() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().load(0x0080, &[0xF0, 0x20]);
    mpu.memory_mut().write(0x2100, 0x11);
    mpu.set_y(0x10);

    run(&mut mpu, &[0xB1, 0x80]);

    assert_eq!(mpu.a(), 0x11);
    assert_eq!(mpu.elapsed_cycles(), 6);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x0015, 0xFE);
    mpu.set_y(0x05);

    run(&mut mpu, &[0xB6, 0x10]);

    assert_eq!(mpu.x(), 0xFE);
    assert!(mpu.flag(Flag::Negative));
    assert_eq!(mpu.elapsed_cycles(), 4);
}

#[test]
fn test_ldx_absolute_y_page_crossing() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x2100, 0x01);
    mpu.set_y(0x01);

    run(&mut mpu, &[0xBE, 0xFF, 0x20]);

    assert_eq!(mpu.x(), 0x01);
    assert_eq!(mpu.elapsed_cycles(), 5);
}

#[test]
fn test_ldy_absolute_x_page_crossing() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().write(0x2100, 0x00);
    mpu.set_y(0x12);
    mpu.set_x(0x01);

    run(&mut mpu, &[0xBC, 0xFF, 0x20]);

    assert_eq!(mpu.y(), 0x00);
    assert!(mpu.flag(Flag::Zero));
    assert_eq!(mpu.elapsed_cycles(), 5);
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut mpu = setup_mpu();
    mpu.set_a(0x42);

    run(&mut mpu, &[0x85, 0x10]);

    assert_eq!(mpu.memory().read(0x0010), 0x42);
    assert_eq!(mpu.elapsed_cycles(), 3);
}

#[test]
fn test_sta_does_not_touch_flags() {
    let mut mpu = setup_mpu();
    mpu.set_flags(Flags::from_bits(0xFF));
    mpu.set_a(0x00);

    run(&mut mpu, &[0x8D, 0x00, 0x20]);

    assert_eq!(mpu.memory().read(0x2000), 0x00);
    assert_eq!(mpu.flags().bits(), 0xFF);
    assert_eq!(mpu.elapsed_cycles(), 4);
}

#[test]
fn test_sta_absolute_x_fixed_cycles() {
    let mut same_page = setup_mpu();
    same_page.set_a(0x01);
    same_page.set_x(0x01);
    run(&mut same_page, &[0x9D, 0x00, 0x20]);
    assert_eq!(same_page.memory().read(0x2001), 0x01);
    assert_eq!(same_page.elapsed_cycles(), 5);

    let mut crossing = setup_mpu();
    crossing.set_a(0x02);
    crossing.set_x(0x01);
    run(&mut crossing, &[0x9D, 0xFF, 0x20]);
    assert_eq!(crossing.memory().read(0x2100), 0x02);
    assert_eq!(crossing.elapsed_cycles(), 5);
}

#[test]
fn test_sta_indirect_y_fixed_cycles() {
    let mut mpu = setup_mpu();
    mpu.memory_mut().load(0x0040, &[0xFF, 0x20]);
    mpu.set_a(0x99);
    mpu.set_y(0x01);

    run(&mut mpu, &[0x91, 0x40]);

    assert_eq!(mpu.memory().read(0x2100), 0x99);
    assert_eq!(mpu.elapsed_cycles(), 6);
}

#[test]
fn test_stx_zero_page_y_wraps() {
    let mut mpu = setup_mpu();
    mpu.set_x(0xAB);
    mpu.set_y(0x02);

    run(&mut mpu, &[0x96, 0xFF]);

    assert_eq!(mpu.memory().read(0x0001), 0xAB);
    assert_eq!(mpu.elapsed_cycles(), 4);
}

#[test]
fn test_sty_absolute() {
    let mut mpu = setup_mpu();
    mpu.set_y(0xCD);

    run(&mut mpu, &[0x8C, 0x00, 0x30]);

    assert_eq!(mpu.memory().read(0x3000), 0xCD);
    assert_eq!(mpu.elapsed_cycles(), 4);
}
