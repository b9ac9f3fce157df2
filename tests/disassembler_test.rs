//! Golden-output tests for decoding and disassembly.

use mpu6502::{disassemble, AddressingMode, FlatMemory, MemoryBus, MPU};

fn memory_with(address: u16, bytes: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load(address, bytes);
    memory
}

#[test]
fn test_disassemble_program() {
    let program = [
        0xA2, 0x05, // LDX #$05
        0xCA, // DEX
        0xD0, 0xFD, // BNE -$03
        0x8D, 0x00, 0x02, // STA $0200
        0x6C, 0xFC, 0xFF, // JMP ($FFFC)
        0xB1, 0x10, // LDA ($10),Y
        0x0A, // ASL A
    ];
    let memory = memory_with(0x0600, &program);

    let lines: Vec<String> = disassemble(&memory, 0x0600, 7)
        .unwrap()
        .iter()
        .map(|instr| instr.to_string())
        .collect();

    assert_eq!(
        lines,
        [
            "0600: LDX #$05",
            "0602: DEX",
            "0603: BNE -$03",
            "0605: STA $0200",
            "0608: JMP ($FFFC)",
            "060B: LDA ($10),Y",
            "060D: ASL A",
        ]
    );
}

#[test]
fn test_listing_program() {
    let memory = memory_with(0x1000, &[0x69, 0x12, 0x6D, 0x00, 0x20, 0xEA]);

    let listing: Vec<String> = disassemble(&memory, 0x1000, 3)
        .unwrap()
        .iter()
        .map(|instr| instr.listing())
        .collect();

    assert_eq!(
        listing,
        [
            "1000: 69 12    ADC #$12",
            "1002: 6D 00 20 ADC $2000",
            "1005: EA       NOP",
        ]
    );
}

#[test]
fn test_decode_is_idempotent_and_pure() {
    let mut memory = memory_with(0x1000, &[0x7D, 0xFF, 0x20]);
    memory.write(0x2100, 0x01);
    let mut mpu = MPU::new(memory, 0x1000);
    mpu.set_x(0x01);
    let registers = *mpu.registers();

    let first = mpu.decode(0x1000).unwrap();
    let second = mpu.decode(0x1000).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), "1000: ADC $20FF,X");
    assert_eq!(first.extra_cycles, 0);
    assert_eq!(*mpu.registers(), registers);
    assert_eq!(mpu.elapsed_cycles(), 0);
}

#[test]
fn test_decoded_fields() {
    let memory = memory_with(0x4000, &[0x91, 0x80]);
    let mpu = MPU::new(memory, 0x4000);

    let instr = mpu.decode(0x4000).unwrap();

    assert_eq!(instr.address, 0x4000);
    assert_eq!(instr.opcode(), 0x91);
    assert_eq!(instr.mnemonic(), "STA");
    assert_eq!(instr.addressing_mode(), AddressingMode::IndirectY);
    assert_eq!(instr.operand, 0x80);
    assert_eq!(instr.size_bytes(), 2);
    assert_eq!(instr.base_cycles(), 6);
    assert_eq!(instr.next_address(), 0x4002);
}

#[test]
fn test_every_opcode_decodes_and_formats() {
    let mut memory = FlatMemory::new();
    for opcode in 0..=0xFFu8 {
        memory.load(0x1000, &[opcode, 0x34, 0x12]);
        let instr = mpu6502::disassembler::decode(&memory, 0x1000).unwrap();
        let text = instr.to_string();

        assert!(text.starts_with("1000: "), "{}", text);
        assert!(text.contains(instr.mnemonic()), "{}", text);
    }
}
