//! JMP (Jump) instruction tests

use emu6502::{Bus, FlatMemory, InstructionTable, ProcessorState};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> ProcessorState {
    let bus = Bus::builder()
        .register_subscriber(Box::new(FlatMemory::new()))
        .build();
    let mut cpu = ProcessorState::new(bus);
    cpu.set_pc(0x8000);
    cpu
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();

    // JMP $1234
    cpu.bus_mut().write8(0x8000, 0x4C);
    cpu.bus_mut().write16(0x8001, 0x1234);
    let flags_before = cpu.flags();

    cpu.step(&table).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.flags(), flags_before, "JMP should not touch flags");
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();

    // JMP ($0120)
    cpu.bus_mut().write8(0x8000, 0x6C);
    cpu.bus_mut().write16(0x8001, 0x0120);
    cpu.bus_mut().write16(0x0120, 0xBAFC);

    cpu.step(&table).unwrap();

    assert_eq!(cpu.pc(), 0xBAFC);
}

#[test]
fn test_jmp_indirect_pointer_at_page_end() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();

    // JMP ($02FF): high byte read from 0x0300
    cpu.bus_mut().write8(0x8000, 0x6C);
    cpu.bus_mut().write16(0x8001, 0x02FF);
    cpu.bus_mut().write8(0x02FF, 0x00);
    cpu.bus_mut().write8(0x0300, 0x40);
    cpu.bus_mut().write8(0x0200, 0x80);

    cpu.step(&table).unwrap();

    assert_eq!(cpu.pc(), 0x4000);
}

#[test]
fn test_jmp_to_self_loops() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();

    cpu.bus_mut().write8(0x8000, 0x4C);
    cpu.bus_mut().write16(0x8001, 0x8000);

    assert_eq!(cpu.run(&table, 5), Ok(5));
    assert_eq!(cpu.pc(), 0x8000);
}
