use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::Mode;

/// Load Accumulator
/// Function: A := M
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let value = cpu.operand_value(mode, memory, budget);
  cpu.a = value;
  cpu.update_zero_and_negative_flags(value);
}

/// Load X register
/// Function: X := M
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let value = cpu.operand_value(mode, memory, budget);
  cpu.x = value;
  cpu.update_zero_and_negative_flags(value);
}

/// Load Y register
/// Function: Y := M
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let value = cpu.operand_value(mode, memory, budget);
  cpu.y = value;
  cpu.update_zero_and_negative_flags(value);
}
