//! # Memory Bus Abstraction
//!
//! The MPU reaches memory only through the `MemoryBus` trait, so how the 64KB
//! address space is backed (RAM, ROM, memory-mapped I/O) is the caller's
//! concern. A flat RAM implementation is provided for tests and simple hosts.
//!
//! The bus follows 6502 hardware behavior: there are no bus errors, every
//! read and write succeeds, and addresses are always 16 bits wide.

/// Memory bus trait for the MPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use mpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Custom Buses
///
/// A 2KB RAM mirrored across the whole address space, with a program
/// running through the mirror:
///
/// ```
/// use mpu6502::{MemoryBus, MPU};
///
/// struct MirroredRam([u8; 0x0800]);
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.0[addr as usize & 0x07FF]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.0[addr as usize & 0x07FF] = value;
///     }
/// }
///
/// let mut ram = MirroredRam([0; 0x0800]);
/// ram.load(0x0200, &[0xA9, 0x07, 0x8D, 0x00, 0x08]); // LDA #$07; STA $0800
///
/// let mut mpu = MPU::new(ram, 0x0A00);
/// mpu.step().unwrap();
/// mpu.step().unwrap();
/// assert_eq!(mpu.memory().read(0x0000), 0x07);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only or unmapped addresses may
    /// ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Writes `bytes` starting at `addr`, wrapping past 0xFFFF to 0x0000.
    ///
    /// ```
    /// use mpu6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFF, &[0x11, 0x22]);
    /// assert_eq!(mem.read(0xFFFF), 0x11);
    /// assert_eq!(mem.read(0x0000), 0x22);
    /// ```
    fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut target = addr;
        for &byte in bytes {
            self.write(target, byte);
            target = target.wrapping_add(1);
        }
    }
}

/// 64KB of zero-initialised RAM with no mapped devices.
///
/// # Examples
///
/// ```
/// use mpu6502::{FlatMemory, MemoryBus, MPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xEA]); // NOP
///
/// let mpu = MPU::new(memory, 0x8000);
/// assert_eq!(mpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    cells: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a FlatMemory with every byte set to 0x00.
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; 0x10000]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.cells[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.cells[addr as usize] = value;
    }
}
