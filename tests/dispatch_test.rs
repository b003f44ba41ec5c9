//! Instruction table and dispatch tests
//!
//! Covers the standard table contents, custom tables built by callers,
//! unimplemented opcodes and the step/run loop.

use emu6502::{
    execute, AddressingMode, Bus, ExecutionError, Flag, FlagRegister, FlatMemory, Instruction,
    InstructionTable, ProcessorState,
};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> ProcessorState {
    let bus = Bus::builder()
        .register_subscriber(Box::new(FlatMemory::new()))
        .build();
    let mut cpu = ProcessorState::new(bus);
    cpu.set_pc(0x8000);
    cpu
}

/// Custom handler: doubles the accumulator.
fn double_a(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.set_a(cpu.a().wrapping_mul(2));
    Ok(cpu.flags())
}

/// Custom handler: adds the resolved operand to X.
fn add_to_x(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    let value = cpu.resolve_value(mode)?;
    cpu.set_x(cpu.x().wrapping_add(value));
    Ok(cpu.flags())
}

// ========== Standard Table ==========

#[test]
fn test_standard_table_entries() {
    let table = InstructionTable::standard();

    let expected = [
        (0x00, "BRK", AddressingMode::Implied),
        (0x4C, "JMP", AddressingMode::Absolute),
        (0x6C, "JMP", AddressingMode::Indirect),
        (0xE8, "INX", AddressingMode::Implied),
        (0xA9, "LDA", AddressingMode::Immediate),
        (0xB1, "LDA", AddressingMode::IndirectIndexed),
        (0xB6, "LDX", AddressingMode::ZeroPageY),
        (0x96, "STX", AddressingMode::ZeroPageY),
        (0x81, "STA", AddressingMode::IndexedIndirect),
        (0xF0, "BEQ", AddressingMode::Relative),
        (0x28, "PLP", AddressingMode::Implied),
    ];

    for (opcode, mnemonic, mode) in expected {
        let instruction = table
            .get(opcode)
            .unwrap_or_else(|| panic!("opcode 0x{:02X} missing", opcode));
        assert_eq!(instruction.mnemonic(), mnemonic);
        assert_eq!(instruction.mode(), mode);
    }
}

#[test]
fn test_standard_table_leaves_gaps() {
    let table = InstructionTable::standard();

    for opcode in [0x02, 0x69, 0xFF, 0x20, 0x60] {
        assert!(table.get(opcode).is_none(), "0x{:02X} should be empty", opcode);
    }
}

#[test]
fn test_instruction_sizes() {
    let table = InstructionTable::standard();
    assert_eq!(table.get(0xEA).map(|i| i.size_bytes()), Some(1));
    assert_eq!(table.get(0xA9).map(|i| i.size_bytes()), Some(2));
    assert_eq!(table.get(0xAD).map(|i| i.size_bytes()), Some(3));
}

#[test]
fn test_iter_matches_len() {
    let table = InstructionTable::standard();
    assert_eq!(table.iter().count(), table.len());
    assert!(table.iter().all(|(opcode, _)| table.get(opcode).is_some()));
}

// ========== Unimplemented ==========

#[test]
fn test_unimplemented_opcode_error() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();
    cpu.bus_mut().write8(0x8000, 0x02);
    cpu.set_a(0x12);

    let result = cpu.step(&table);

    assert_eq!(result, Err(ExecutionError::UnimplementedOpcode(0x02)));
    assert_eq!(cpu.pc(), 0x8001, "PC has already moved past the opcode");
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.flags().bits(), 0x20);
}

#[test]
fn test_unimplemented_error_message() {
    let err = ExecutionError::UnimplementedOpcode(0x02);
    assert_eq!(err.to_string(), "opcode 0x02 is not implemented");
}

#[test]
fn test_empty_table_implements_nothing() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::new();
    assert!(table.is_empty());

    assert_eq!(
        execute(&table, 0xEA, &mut cpu),
        Err(ExecutionError::UnimplementedOpcode(0xEA))
    );
}

// ========== Custom Tables ==========

#[test]
fn test_custom_instruction() {
    let mut cpu = setup_cpu();
    let mut table = InstructionTable::new();
    table.insert(0x02, Instruction::new(double_a, "DBL", AddressingMode::Implied));
    cpu.set_a(0x21);

    execute(&table, 0x02, &mut cpu).unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_custom_instruction_with_operand() {
    let mut cpu = setup_cpu();
    let mut table = InstructionTable::standard();
    table.insert(0x02, Instruction::new(add_to_x, "ADX", AddressingMode::Immediate));
    cpu.bus_mut().write8(0x8000, 0x02);
    cpu.bus_mut().write8(0x8001, 0x05);
    cpu.set_x(0x03);

    cpu.step(&table).unwrap();

    assert_eq!(cpu.x(), 0x08);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_insert_replaces_and_remove_clears() {
    let mut table = InstructionTable::standard();
    let len = table.len();

    let replaced = table.insert(0xEA, Instruction::new(double_a, "DBL", AddressingMode::Implied));
    assert_eq!(replaced.map(|i| i.mnemonic()), Some("NOP"));
    assert_eq!(table.len(), len);

    let removed = table.remove(0xEA);
    assert_eq!(removed.map(|i| i.mnemonic()), Some("DBL"));
    assert!(table.get(0xEA).is_none());
    assert_eq!(table.len(), len - 1);
}

#[test]
fn test_tables_are_independent() {
    let standard = InstructionTable::standard();
    let mut patched = standard.clone();
    patched.remove(0xE8);

    let mut cpu = setup_cpu();
    assert!(execute(&standard, 0xE8, &mut cpu).is_ok());
    assert_eq!(
        execute(&patched, 0xE8, &mut cpu),
        Err(ExecutionError::UnimplementedOpcode(0xE8))
    );
}

#[test]
fn test_bad_mode_pairing_reports_unsupported() {
    let mut cpu = setup_cpu();
    let mut table = InstructionTable::new();
    table.insert(0x02, Instruction::new(add_to_x, "ADX", AddressingMode::Implied));

    assert_eq!(
        execute(&table, 0x02, &mut cpu),
        Err(ExecutionError::UnsupportedAddressingMode {
            mode: AddressingMode::Implied,
            resolver: "value"
        })
    );
}

// ========== Run Loop ==========

#[test]
fn test_run_stops_at_first_error() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();
    // INX, INX, <unassigned>, INX
    for (i, &byte) in [0xE8, 0xE8, 0x02, 0xE8].iter().enumerate() {
        cpu.bus_mut().write8(0x8000 + i as u16, byte);
    }

    assert_eq!(
        cpu.run(&table, 10),
        Err(ExecutionError::UnimplementedOpcode(0x02))
    );
    assert_eq!(cpu.x(), 0x02);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_run_zero_instructions() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();

    assert_eq!(cpu.run(&table, 0), Ok(0));
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_program_end_to_end() {
    let mut cpu = setup_cpu();
    let table = InstructionTable::standard();
    // LDX #$FE; INX; INX; STX $10; TXA
    let program = [0xA2, 0xFE, 0xE8, 0xE8, 0x86, 0x10, 0x8A];
    for (i, &byte) in program.iter().enumerate() {
        cpu.bus_mut().write8(0x8000 + i as u16, byte);
    }

    assert_eq!(cpu.run(&table, 3), Ok(3));
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.is_set(Flag::Zero));

    cpu.run(&table, 2).unwrap();
    assert_eq!(cpu.bus().read8(0x0010), 0x00);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.pc(), 0x8007);
}
