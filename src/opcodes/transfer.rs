use crate::cpu::Cpu;
use crate::memory::Memory;

/// Transfer Accumulator to X
/// Function: X := A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu, _memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  cpu.x = cpu.a;
  cpu.update_zero_and_negative_flags(cpu.x);
}

/// Transfer Accumulator to Y
/// Function: Y := A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu, _memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  cpu.y = cpu.a;
  cpu.update_zero_and_negative_flags(cpu.y);
}

/// Transfer X to Accumulator
/// Function: A := X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu, _memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  cpu.a = cpu.x;
  cpu.update_zero_and_negative_flags(cpu.a);
}

/// Transfer Y to Accumulator
/// Function: A := Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu, _memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  cpu.a = cpu.y;
  cpu.update_zero_and_negative_flags(cpu.a);
}
