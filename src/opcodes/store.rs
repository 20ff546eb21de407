use crate::cpu::Cpu;
use crate::memory::Memory;
use crate::opcodes::Mode;

/// Store Accumulator
/// Function: M := A
/// Flags:
pub fn sta(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let address = cpu.operand_address(mode, memory, budget);
  let value = cpu.a;
  cpu.write_byte(memory, address, value, budget);
}

/// Store X register
/// Function: M := X
/// Flags:
pub fn stx(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let address = cpu.operand_address(mode, memory, budget);
  let value = cpu.x;
  cpu.write_byte(memory, address, value, budget);
}

/// Store Y register
/// Function: M := Y
/// Flags:
pub fn sty(cpu: &mut Cpu, memory: &mut Memory, budget: &mut i32, mode: Mode) {
  let address = cpu.operand_address(mode, memory, budget);
  let value = cpu.y;
  cpu.write_byte(memory, address, value, budget);
}
