use crate::cpu::Cpu;
use crate::memory::Memory;

/// Transfer Stack pointer to X
/// Function: X := SP
/// Flags: N Z (from A, not X — see DESIGN.md Open Question 1)
pub fn tsx(cpu: &mut Cpu, _memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  cpu.x = cpu.sp;
  cpu.update_zero_and_negative_flags(cpu.a);
}

/// Transfer X to Stack pointer
/// Function: SP := X
/// Flags:
pub fn txs(cpu: &mut Cpu, _memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  cpu.sp = cpu.x;
}

/// Push Accumulator on stack
/// Function: (SP)-- := A
/// Flags:
pub fn pha(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  let value = cpu.a;
  cpu.push_byte(memory, value, budget);
}

/// Push Processor status on stack
/// Function: (SP)-- := P
/// Flags:
pub fn php(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32) {
  *budget -= 1;
  let value = cpu.p;
  cpu.push_byte(memory, value, budget);
}

/// Pull Accumulator from stack
/// Function: A := ++(SP)
/// Flags: N Z
pub fn pla(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32) {
  *budget -= 2;
  cpu.a = cpu.pop_byte(memory, budget);
  cpu.update_zero_and_negative_flags(cpu.a);
}

/// Pull Processor status from stack
/// Function: P := ++(SP)
/// Flags: N V D I Z C
pub fn plp(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32) {
  *budget -= 2;
  cpu.p = cpu.pop_byte(memory, budget);
}
