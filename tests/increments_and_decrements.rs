use cpu_6502::cpu::StatusFlag;
use cpu_6502::{Cpu, Memory};

#[test]
fn inc_zero_page_increments_memory_and_sets_flags() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0xE6);
  memory.write_byte(0xFFFD, 0x22);
  memory.write_byte(0x0022, 0x84);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;

  let consumed = cpu.execute(5, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x0022), 0x85);
  assert!(cpu.is_status_flag_set(StatusFlag::Negative));
  assert!(!cpu.is_status_flag_set(StatusFlag::Zero));
  assert_eq!(consumed, 5);
}

#[test]
fn inc_wraps_from_0xff_to_0x00() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0xE6);
  memory.write_byte(0xFFFD, 0x22);
  memory.write_byte(0x0022, 0xFF);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;

  cpu.execute(5, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x0022), 0x00);
  assert!(cpu.is_status_flag_set(StatusFlag::Zero));
}

#[test]
fn dec_absolute_x_always_charges_seven_cycles() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0xDE);
  memory.write_byte(0xFFFD, 0x00);
  memory.write_byte(0xFFFE, 0x40);
  memory.write_byte(0x4001, 0x01);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;
  cpu.x = 1;

  let consumed = cpu.execute(7, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x4001), 0x00);
  assert_eq!(consumed, 7);
}

#[test]
fn dec_zero_page_x_wraps_and_decrements() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0xD6);
  memory.write_byte(0xFFFD, 0x00);
  memory.write_byte(0x0002, 0x05);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;
  cpu.x = 2;

  let consumed = cpu.execute(6, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x0002), 0x04);
  assert_eq!(consumed, 6);
}
