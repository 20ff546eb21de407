use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::Mode;

/// Increment Memory
/// Function: M := M + 1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let address = cpu.operand_address(mode, memory, budget);
  let value = cpu.read_byte(memory, address, budget);
  *budget -= 1;
  let result = value.wrapping_add(1);
  cpu.write_byte(memory, address, result, budget);
  cpu.update_zero_and_negative_flags(result);
}

/// Decrement Memory
/// Function: M := M - 1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let address = cpu.operand_address(mode, memory, budget);
  let value = cpu.read_byte(memory, address, budget);
  *budget -= 1;
  let result = value.wrapping_sub(1);
  cpu.write_byte(memory, address, result, budget);
  cpu.update_zero_and_negative_flags(result);
}
