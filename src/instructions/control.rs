//! # Control Flow Instructions
//!
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC as a word onto the stack
//! 2. Pushes the status register
//! 3. Loads PC from the IRQ vector at $FFFE/F
//! 4. Sets the B flag

use crate::{AddressingMode, ExecutionError, Flag, FlagRegister, ProcessorState, IRQ_VECTOR};

/// Executes the BRK (Force Interrupt) instruction.
///
/// The word is pushed before the status byte, so a caller unwinding the
/// stack pops the status first and then the return address.
///
/// Flags affected:
/// - B: Set to 1 after the status byte has been pushed
pub(crate) fn execute_brk(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.push_stack16(cpu.pc);
    cpu.push_stack8(cpu.flags.bits());

    cpu.pc = cpu.bus.read16(IRQ_VECTOR);
    cpu.flags.set_flag(Flag::BreakCommand, true);

    Ok(cpu.flags)
}

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// The Indirect form reads the high byte of the target from pointer + 1 even
/// when the pointer sits at the end of a page; the NMOS wrap bug is not
/// reproduced.
///
/// Flags affected: None
pub(crate) fn execute_jmp(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.pc = cpu.resolve_address(mode)?;
    Ok(cpu.flags)
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(cpu.flags)
}
