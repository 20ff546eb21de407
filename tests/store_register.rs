use cpu_6502::cpu::StatusFlag;
use cpu_6502::{Cpu, Memory};

#[test]
fn sta_zero_page_stores_accumulator_without_touching_flags() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0x85);
  memory.write_byte(0xFFFD, 0x22);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;
  cpu.a = 0x84;
  cpu.set_status_flag(StatusFlag::Zero, true);

  let consumed = cpu.execute(3, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x0022), 0x84);
  assert!(cpu.is_status_flag_set(StatusFlag::Zero));
  assert_eq!(consumed, 3);
}

#[test]
fn sta_absolute_x_always_charges_the_extra_cycle() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0x9D);
  memory.write_byte(0xFFFD, 0x00);
  memory.write_byte(0xFFFE, 0x44);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;
  cpu.a = 0x11;
  cpu.x = 0x01;

  // No page crossing occurs (0x4400 + 1 = 0x4401), but the write variant
  // always pays the dummy-read cycle regardless.
  let consumed = cpu.execute(5, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x4401), 0x11);
  assert_eq!(consumed, 5);
}

#[test]
fn sta_indirect_y_six_cycle_form() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0x91);
  memory.write_byte(0xFFFD, 0x10);
  memory.write_byte(0x0010, 0x00);
  memory.write_byte(0x0011, 0x40);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;
  cpu.a = 0x5A;
  cpu.y = 0x05;

  let consumed = cpu.execute(6, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x4005), 0x5A);
  assert_eq!(consumed, 6);
}

#[test]
fn stx_zero_page_y_stores_x_not_y() {
  // Canonical behavior: the source's transcription bug (storing Y) is not
  // reproduced here.
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0x96);
  memory.write_byte(0xFFFD, 0x10);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;
  cpu.x = 0x42;
  cpu.y = 0x99;

  cpu.execute(4, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x0010), 0x42);
}

#[test]
fn sty_absolute_stores_y() {
  let mut memory = Memory::new();
  memory.write_byte(0xFFFC, 0x8C);
  memory.write_byte(0xFFFD, 0x00);
  memory.write_byte(0xFFFE, 0x50);
  let mut cpu = Cpu::new();
  cpu.pc = 0xFFFC;
  cpu.y = 0x77;

  let consumed = cpu.execute(4, &mut memory).unwrap();

  assert_eq!(memory.read_byte(0x5000), 0x77);
  assert_eq!(consumed, 4);
}
