//! # MPU Configuration
//!
//! Construction-time settings for the execution engine.

/// What `step()` does when it fetches an opcode without a registered handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnimplementedPolicy {
    /// Return `ExecutionError::UnimplementedOpcode` and leave all state untouched.
    #[default]
    Fail,

    /// Treat the opcode as a 1-byte, 0-cycle no-op and log a warning.
    Ignore,
}

/// MPU configuration.
///
/// # Examples
///
/// ```
/// use mpu6502::{FlatMemory, MpuConfig, UnimplementedPolicy, MPU};
///
/// let config = MpuConfig::default()
///     .with_start_pc(0x0600)
///     .with_unimplemented(UnimplementedPolicy::Ignore);
///
/// let mpu = MPU::with_config(FlatMemory::new(), config);
/// assert_eq!(mpu.pc(), 0x0600);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MpuConfig {
    /// Program counter loaded by `reset()`.
    pub start_pc: u16,

    /// Handling of opcodes without a registered handler.
    pub unimplemented: UnimplementedPolicy,
}

impl MpuConfig {
    /// Sets the program counter loaded by `reset()`.
    pub fn with_start_pc(mut self, start_pc: u16) -> Self {
        self.start_pc = start_pc;
        self
    }

    /// Sets the unimplemented-opcode policy.
    pub fn with_unimplemented(mut self, policy: UnimplementedPolicy) -> Self {
        self.unimplemented = policy;
        self
    }
}
