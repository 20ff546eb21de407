use crate::cpu::{Cpu, StatusFlag};
use crate::memory::Memory;
use crate::opcodes::Mode;

/// Logical AND
/// Function: A := A & M
/// Flags: N Z
pub fn and(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let value = cpu.operand_value(mode, memory, budget);
  cpu.a &= value;
  cpu.update_zero_and_negative_flags(cpu.a);
}

/// Exclusive OR
/// Function: A := A ^ M
/// Flags: N Z
pub fn eor(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let value = cpu.operand_value(mode, memory, budget);
  cpu.a ^= value;
  cpu.update_zero_and_negative_flags(cpu.a);
}

/// Logical Inclusive OR
/// Function: A := A | M
/// Flags: N Z
pub fn ora(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let value = cpu.operand_value(mode, memory, budget);
  cpu.a |= value;
  cpu.update_zero_and_negative_flags(cpu.a);
}

/// Bit Test
/// Function: Z := A & M, N := bit7(A & M), V := bit6(A & M)
/// Flags: N V Z
///
/// N and V come from the AND result rather than from the raw operand as
/// canonical 6502 hardware does — see DESIGN.md Open Question 2.
pub fn bit(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let value = cpu.operand_value(mode, memory, budget);
  let result = cpu.a & value;
  cpu.set_status_flag(StatusFlag::Negative, result & 0x80 != 0);
  cpu.set_status_flag(StatusFlag::Overflow, result & 0x40 != 0);
  cpu.set_status_flag(StatusFlag::Zero, result == 0);
}
