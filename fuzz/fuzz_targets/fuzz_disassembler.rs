//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary memory images to `disassemble` and checks that the decoded
//! stream tiles memory exactly and renders without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mpu6502::{disassemble, FlatMemory, MemoryBus};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
    count: u8,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let mut memory = FlatMemory::new();
    memory.load(input.start_address, &input.bytes);

    let instructions = match disassemble(&memory, input.start_address, input.count as usize) {
        Ok(instructions) => instructions,
        Err(error) => panic!("static table produced {error}"),
    };

    let mut expected_address = input.start_address;
    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!((1..=3).contains(&instr.size_bytes()));
        assert_eq!(instr.bytes().len(), instr.size_bytes() as usize);

        let text = instr.to_string();
        assert!(text.starts_with(&format!("{:04X}: ", instr.address)));
        let _ = instr.listing();

        expected_address = instr.next_address();
    }
});
