//! A cycle-accurate MOS Technology 6502 instruction-execution core.
//!
//! Given a 64 KiB [`Memory`] image and a [`Cpu`], [`Cpu::execute`] runs the
//! fetch-decode-execute loop for a requested number of machine cycles,
//! mutating registers, flags, and memory exactly as the documented opcode
//! set (see `opcodes::op`) would on real hardware.

pub mod cpu;
pub mod error;
pub mod memory;
pub mod opcodes;

pub use cpu::Cpu;
pub use error::CpuError;
pub use memory::Memory;
