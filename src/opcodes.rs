//! Addressing-mode tags and the opcode dispatch table.
//!
//! Each opcode family lives in its own submodule (mirroring the original
//! `opcodes_move.rs` / `opcodes_jump.rs` / `opcodes_logical.rs` split): one
//! function per mnemonic, doc comments giving the register-transfer notation
//! and the flags it touches.

pub mod incdec;
pub mod jump;
pub mod load;
pub mod logical;
pub mod stack;
pub mod store;
pub mod transfer;

use crate::cpu::Cpu;
use crate::error::CpuError;
use crate::memory::Memory;

/// Addressing mode, resolved by [`Cpu::operand_address`]/[`Cpu::operand_value`].
///
/// `*Always` variants charge the page-crossing cycle unconditionally, as the
/// real processor does on indexed writes and read-modify-write instructions
/// (it performs a dummy read regardless of whether a page was crossed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Immediate,
  ZeroPage,
  ZeroPageX,
  ZeroPageY,
  Absolute,
  AbsoluteX,
  AbsoluteY,
  AbsoluteXAlways,
  AbsoluteYAlways,
  IndirectX,
  IndirectY,
  IndirectYAlways,
}

#[rustfmt::skip]
pub mod op {
  // Load register
  pub const LDA_IMMEDIATE: u8  = 0xA9;
  pub const LDA_ZERO_PAGE: u8  = 0xA5;
  pub const LDA_ZERO_PAGE_X: u8 = 0xB5;
  pub const LDA_ABSOLUTE: u8   = 0xAD;
  pub const LDA_ABSOLUTE_X: u8 = 0xBD;
  pub const LDA_ABSOLUTE_Y: u8 = 0xB9;
  pub const LDA_INDIRECT_X: u8 = 0xA1;
  pub const LDA_INDIRECT_Y: u8 = 0xB1;

  pub const LDX_IMMEDIATE: u8  = 0xA2;
  pub const LDX_ZERO_PAGE: u8  = 0xA6;
  pub const LDX_ZERO_PAGE_Y: u8 = 0xB6;
  pub const LDX_ABSOLUTE: u8   = 0xAE;
  pub const LDX_ABSOLUTE_Y: u8 = 0xBE;

  pub const LDY_IMMEDIATE: u8  = 0xA0;
  pub const LDY_ZERO_PAGE: u8  = 0xA4;
  pub const LDY_ZERO_PAGE_X: u8 = 0xB4;
  pub const LDY_ABSOLUTE: u8   = 0xAC;
  pub const LDY_ABSOLUTE_X: u8 = 0xBC;

  // Store register
  pub const STA_ZERO_PAGE: u8   = 0x85;
  pub const STA_ZERO_PAGE_X: u8 = 0x95;
  pub const STA_ABSOLUTE: u8    = 0x8D;
  pub const STA_ABSOLUTE_X: u8  = 0x9D;
  pub const STA_ABSOLUTE_Y: u8  = 0x99;
  pub const STA_INDIRECT_X: u8  = 0x81;
  pub const STA_INDIRECT_Y: u8  = 0x91;

  pub const STX_ZERO_PAGE: u8   = 0x86;
  pub const STX_ZERO_PAGE_Y: u8 = 0x96;
  pub const STX_ABSOLUTE: u8    = 0x8E;

  pub const STY_ZERO_PAGE: u8   = 0x84;
  pub const STY_ZERO_PAGE_X: u8 = 0x94;
  pub const STY_ABSOLUTE: u8    = 0x8C;

  // Register transfer
  pub const TAX: u8 = 0xAA;
  pub const TAY: u8 = 0xA8;
  pub const TXA: u8 = 0x8A;
  pub const TYA: u8 = 0x98;

  // Stack
  pub const TSX: u8 = 0xBA;
  pub const TXS: u8 = 0x9A;
  pub const PHA: u8 = 0x48;
  pub const PHP: u8 = 0x08;
  pub const PLA: u8 = 0x68;
  pub const PLP: u8 = 0x28;

  // Jumps and calls
  pub const JSR: u8      = 0x20;
  pub const RTS: u8      = 0x60;
  pub const JMP_ABS: u8  = 0x4C;
  pub const JMP_IND: u8  = 0x6C;

  // Logical
  pub const AND_IMMEDIATE: u8  = 0x29;
  pub const AND_ZERO_PAGE: u8  = 0x25;
  pub const AND_ZERO_PAGE_X: u8 = 0x35;
  pub const AND_ABSOLUTE: u8   = 0x2D;
  pub const AND_ABSOLUTE_X: u8 = 0x3D;
  pub const AND_ABSOLUTE_Y: u8 = 0x39;
  pub const AND_INDIRECT_X: u8 = 0x21;
  pub const AND_INDIRECT_Y: u8 = 0x31;

  pub const EOR_IMMEDIATE: u8  = 0x49;
  pub const EOR_ZERO_PAGE: u8  = 0x45;
  pub const EOR_ZERO_PAGE_X: u8 = 0x55;
  pub const EOR_ABSOLUTE: u8   = 0x4D;
  pub const EOR_ABSOLUTE_X: u8 = 0x5D;
  pub const EOR_ABSOLUTE_Y: u8 = 0x59;
  pub const EOR_INDIRECT_X: u8 = 0x41;
  pub const EOR_INDIRECT_Y: u8 = 0x51;

  pub const ORA_IMMEDIATE: u8  = 0x09;
  pub const ORA_ZERO_PAGE: u8  = 0x05;
  pub const ORA_ZERO_PAGE_X: u8 = 0x15;
  pub const ORA_ABSOLUTE: u8   = 0x0D;
  pub const ORA_ABSOLUTE_X: u8 = 0x1D;
  pub const ORA_ABSOLUTE_Y: u8 = 0x19;
  pub const ORA_INDIRECT_X: u8 = 0x01;
  pub const ORA_INDIRECT_Y: u8 = 0x11;

  pub const BIT_ZERO_PAGE: u8 = 0x24;
  pub const BIT_ABSOLUTE: u8  = 0x2C;

  // Increment/decrement memory
  pub const INC_ZERO_PAGE: u8   = 0xE6;
  pub const INC_ZERO_PAGE_X: u8 = 0xF6;
  pub const INC_ABSOLUTE: u8    = 0xEE;
  pub const INC_ABSOLUTE_X: u8  = 0xFE;

  pub const DEC_ZERO_PAGE: u8   = 0xC6;
  pub const DEC_ZERO_PAGE_X: u8 = 0xD6;
  pub const DEC_ABSOLUTE: u8    = 0xCE;
  pub const DEC_ABSOLUTE_X: u8  = 0xDE;
}

/// Decodes `opcode` and runs its handler, debiting `budget` along the way.
///
/// Bytes outside the documented set (branches, INX/INY/DEX/DEY, and anything
/// else the original source never wired up) fall through to `Err`.
pub fn dispatch(
  cpu: &mut Cpu,
  memory: &mut Memory,
  budget: &mut i32,
  opcode: u8,
) -> Result<(), CpuError> {
  use op::*;

  match opcode {
    LDA_IMMEDIATE => load::lda(cpu, memory, budget, Mode::Immediate),
    LDA_ZERO_PAGE => load::lda(cpu, memory, budget, Mode::ZeroPage),
    LDA_ZERO_PAGE_X => load::lda(cpu, memory, budget, Mode::ZeroPageX),
    LDA_ABSOLUTE => load::lda(cpu, memory, budget, Mode::Absolute),
    LDA_ABSOLUTE_X => load::lda(cpu, memory, budget, Mode::AbsoluteX),
    LDA_ABSOLUTE_Y => load::lda(cpu, memory, budget, Mode::AbsoluteY),
    LDA_INDIRECT_X => load::lda(cpu, memory, budget, Mode::IndirectX),
    LDA_INDIRECT_Y => load::lda(cpu, memory, budget, Mode::IndirectY),

    LDX_IMMEDIATE => load::ldx(cpu, memory, budget, Mode::Immediate),
    LDX_ZERO_PAGE => load::ldx(cpu, memory, budget, Mode::ZeroPage),
    LDX_ZERO_PAGE_Y => load::ldx(cpu, memory, budget, Mode::ZeroPageY),
    LDX_ABSOLUTE => load::ldx(cpu, memory, budget, Mode::Absolute),
    LDX_ABSOLUTE_Y => load::ldx(cpu, memory, budget, Mode::AbsoluteY),

    LDY_IMMEDIATE => load::ldy(cpu, memory, budget, Mode::Immediate),
    LDY_ZERO_PAGE => load::ldy(cpu, memory, budget, Mode::ZeroPage),
    LDY_ZERO_PAGE_X => load::ldy(cpu, memory, budget, Mode::ZeroPageX),
    LDY_ABSOLUTE => load::ldy(cpu, memory, budget, Mode::Absolute),
    LDY_ABSOLUTE_X => load::ldy(cpu, memory, budget, Mode::AbsoluteX),

    STA_ZERO_PAGE => store::sta(cpu, memory, budget, Mode::ZeroPage),
    STA_ZERO_PAGE_X => store::sta(cpu, memory, budget, Mode::ZeroPageX),
    STA_ABSOLUTE => store::sta(cpu, memory, budget, Mode::Absolute),
    STA_ABSOLUTE_X => store::sta(cpu, memory, budget, Mode::AbsoluteXAlways),
    STA_ABSOLUTE_Y => store::sta(cpu, memory, budget, Mode::AbsoluteYAlways),
    STA_INDIRECT_X => store::sta(cpu, memory, budget, Mode::IndirectX),
    STA_INDIRECT_Y => store::sta(cpu, memory, budget, Mode::IndirectYAlways),

    STX_ZERO_PAGE => store::stx(cpu, memory, budget, Mode::ZeroPage),
    STX_ZERO_PAGE_Y => store::stx(cpu, memory, budget, Mode::ZeroPageY),
    STX_ABSOLUTE => store::stx(cpu, memory, budget, Mode::Absolute),

    STY_ZERO_PAGE => store::sty(cpu, memory, budget, Mode::ZeroPage),
    STY_ZERO_PAGE_X => store::sty(cpu, memory, budget, Mode::ZeroPageX),
    STY_ABSOLUTE => store::sty(cpu, memory, budget, Mode::Absolute),

    TAX => transfer::tax(cpu, memory, budget),
    TAY => transfer::tay(cpu, memory, budget),
    TXA => transfer::txa(cpu, memory, budget),
    TYA => transfer::tya(cpu, memory, budget),

    TSX => stack::tsx(cpu, memory, budget),
    TXS => stack::txs(cpu, memory, budget),
    PHA => stack::pha(cpu, memory, budget),
    PHP => stack::php(cpu, memory, budget),
    PLA => stack::pla(cpu, memory, budget),
    PLP => stack::plp(cpu, memory, budget),

    JSR => jump::jsr(cpu, memory, budget),
    RTS => jump::rts(cpu, memory, budget),
    JMP_ABS => jump::jmp(cpu, memory, budget),
    JMP_IND => jump::jmp_indirect(cpu, memory, budget),

    AND_IMMEDIATE => logical::and(cpu, memory, budget, Mode::Immediate),
    AND_ZERO_PAGE => logical::and(cpu, memory, budget, Mode::ZeroPage),
    AND_ZERO_PAGE_X => logical::and(cpu, memory, budget, Mode::ZeroPageX),
    AND_ABSOLUTE => logical::and(cpu, memory, budget, Mode::Absolute),
    AND_ABSOLUTE_X => logical::and(cpu, memory, budget, Mode::AbsoluteX),
    AND_ABSOLUTE_Y => logical::and(cpu, memory, budget, Mode::AbsoluteY),
    AND_INDIRECT_X => logical::and(cpu, memory, budget, Mode::IndirectX),
    AND_INDIRECT_Y => logical::and(cpu, memory, budget, Mode::IndirectY),

    EOR_IMMEDIATE => logical::eor(cpu, memory, budget, Mode::Immediate),
    EOR_ZERO_PAGE => logical::eor(cpu, memory, budget, Mode::ZeroPage),
    EOR_ZERO_PAGE_X => logical::eor(cpu, memory, budget, Mode::ZeroPageX),
    EOR_ABSOLUTE => logical::eor(cpu, memory, budget, Mode::Absolute),
    EOR_ABSOLUTE_X => logical::eor(cpu, memory, budget, Mode::AbsoluteX),
    EOR_ABSOLUTE_Y => logical::eor(cpu, memory, budget, Mode::AbsoluteY),
    EOR_INDIRECT_X => logical::eor(cpu, memory, budget, Mode::IndirectX),
    EOR_INDIRECT_Y => logical::eor(cpu, memory, budget, Mode::IndirectY),

    ORA_IMMEDIATE => logical::ora(cpu, memory, budget, Mode::Immediate),
    ORA_ZERO_PAGE => logical::ora(cpu, memory, budget, Mode::ZeroPage),
    ORA_ZERO_PAGE_X => logical::ora(cpu, memory, budget, Mode::ZeroPageX),
    ORA_ABSOLUTE => logical::ora(cpu, memory, budget, Mode::Absolute),
    ORA_ABSOLUTE_X => logical::ora(cpu, memory, budget, Mode::AbsoluteX),
    ORA_ABSOLUTE_Y => logical::ora(cpu, memory, budget, Mode::AbsoluteY),
    ORA_INDIRECT_X => logical::ora(cpu, memory, budget, Mode::IndirectX),
    ORA_INDIRECT_Y => logical::ora(cpu, memory, budget, Mode::IndirectY),

    BIT_ZERO_PAGE => logical::bit(cpu, memory, budget, Mode::ZeroPage),
    BIT_ABSOLUTE => logical::bit(cpu, memory, budget, Mode::Absolute),

    INC_ZERO_PAGE => incdec::inc(cpu, memory, budget, Mode::ZeroPage),
    INC_ZERO_PAGE_X => incdec::inc(cpu, memory, budget, Mode::ZeroPageX),
    INC_ABSOLUTE => incdec::inc(cpu, memory, budget, Mode::Absolute),
    INC_ABSOLUTE_X => incdec::inc(cpu, memory, budget, Mode::AbsoluteXAlways),

    DEC_ZERO_PAGE => incdec::dec(cpu, memory, budget, Mode::ZeroPage),
    DEC_ZERO_PAGE_X => incdec::dec(cpu, memory, budget, Mode::ZeroPageX),
    DEC_ABSOLUTE => incdec::dec(cpu, memory, budget, Mode::Absolute),
    DEC_ABSOLUTE_X => incdec::dec(cpu, memory, budget, Mode::AbsoluteXAlways),

    _ => {
      return Err(CpuError::UnknownOpcode {
        opcode,
        pc: cpu.pc.wrapping_sub(1),
      })
    }
  }
  Ok(())
}
