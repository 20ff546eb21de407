use thiserror::Error;

/// Failure surfaced by [`crate::Cpu::execute`].
///
/// The engine has exactly one way to fail: dispatch falls off the end of the
/// documented opcode set (see the dispatch `match` in `opcodes.rs`). There is
/// no I/O, so no other variant is needed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
  #[error("unknown opcode {opcode:#04X} fetched at PC={pc:#06X}")]
  UnknownOpcode { opcode: u8, pc: u16 },
}
