//! Load instruction tests (LDA, LDX, LDY)

use emu6502::{Bus, Flag, FlatMemory, InstructionTable, ProcessorState};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> ProcessorState {
    let bus = Bus::builder()
        .register_subscriber(Box::new(FlatMemory::new()))
        .build();
    let mut cpu = ProcessorState::new(bus);
    cpu.set_pc(0x8000);
    cpu
}

/// Places `program` at 0x8000 and executes its first instruction.
fn run_program(cpu: &mut ProcessorState, program: &[u8]) {
    let table = InstructionTable::standard();
    for (i, &byte) in program.iter().enumerate() {
        cpu.bus_mut().write8(0x8000 + i as u16, byte);
    }
    cpu.step(&table).unwrap();
}

// ========== LDA ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();

    run_program(&mut cpu, &[0xA9, 0x42]);

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
    assert!(!cpu.is_set(Flag::Zero));
    assert!(!cpu.is_set(Flag::Negative));
}

#[test]
fn test_lda_immediate_zero_and_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    run_program(&mut cpu, &[0xA9, 0x00]);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.is_set(Flag::Zero));

    let mut cpu = setup_cpu();
    run_program(&mut cpu, &[0xA9, 0x80]);
    assert!(cpu.is_set(Flag::Negative));
    assert!(!cpu.is_set(Flag::Zero));
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write8(0x0042, 0x37);

    run_program(&mut cpu, &[0xA5, 0x42]);

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x10);
    cpu.bus_mut().write8(0x000F, 0x99);

    run_program(&mut cpu, &[0xB5, 0xFF]);

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write8(0x1234, 0x55);

    run_program(&mut cpu, &[0xAD, 0x34, 0x12]);

    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_lda_absolute_x_and_y() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x05);
    cpu.bus_mut().write8(0x2005, 0xAA);
    run_program(&mut cpu, &[0xBD, 0x00, 0x20]);
    assert_eq!(cpu.a(), 0xAA);

    let mut cpu = setup_cpu();
    cpu.set_y(0x06);
    cpu.bus_mut().write8(0x2006, 0xBB);
    run_program(&mut cpu, &[0xB9, 0x00, 0x20]);
    assert_eq!(cpu.a(), 0xBB);
}

#[test]
fn test_lda_indexed_indirect() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x02);
    cpu.bus_mut().write16(0x0012, 0x3000);
    cpu.bus_mut().write8(0x3000, 0x7E);

    run_program(&mut cpu, &[0xA1, 0x10]);

    assert_eq!(cpu.a(), 0x7E);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_indirect_indexed() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x04);
    cpu.bus_mut().write16(0x0010, 0x3000);
    cpu.bus_mut().write8(0x3004, 0x6D);

    run_program(&mut cpu, &[0xB1, 0x10]);

    assert_eq!(cpu.a(), 0x6D);
}

// ========== LDX ==========

#[test]
fn test_ldx_immediate() {
    let mut cpu = setup_cpu();
    run_program(&mut cpu, &[0xA2, 0xFE]);
    assert_eq!(cpu.x(), 0xFE);
    assert!(cpu.is_set(Flag::Negative));
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x03);
    cpu.bus_mut().write8(0x0023, 0x44);

    run_program(&mut cpu, &[0xB6, 0x20]);

    assert_eq!(cpu.x(), 0x44);
}

#[test]
fn test_ldx_absolute_y() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x01);
    cpu.bus_mut().write8(0x4001, 0x00);
    cpu.set_x(0x12);

    run_program(&mut cpu, &[0xBE, 0x00, 0x40]);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.is_set(Flag::Zero));
}

// ========== LDY ==========

#[test]
fn test_ldy_immediate() {
    let mut cpu = setup_cpu();
    run_program(&mut cpu, &[0xA0, 0x01]);
    assert_eq!(cpu.y(), 0x01);
    assert!(!cpu.is_set(Flag::Zero));
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.bus_mut().write8(0x0081, 0x90);

    run_program(&mut cpu, &[0xB4, 0x80]);

    assert_eq!(cpu.y(), 0x90);
    assert!(cpu.is_set(Flag::Negative));
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x10);
    cpu.bus_mut().write8(0x1010, 0x21);

    run_program(&mut cpu, &[0xBC, 0x00, 0x10]);

    assert_eq!(cpu.y(), 0x21);
}
