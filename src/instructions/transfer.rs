//! # Register Transfer Instructions
//!
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer into A, X or Y updates Z and N from the copied value.
//! TXS writes the stack pointer and leaves the flags alone.

use crate::{AddressingMode, ExecutionError, FlagRegister, ProcessorState};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.x = cpu.a;
    cpu.flags.update_zero_negative(cpu.x);
    Ok(cpu.flags)
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.y = cpu.a;
    cpu.flags.update_zero_negative(cpu.y);
    Ok(cpu.flags)
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.a = cpu.x;
    cpu.flags.update_zero_negative(cpu.a);
    Ok(cpu.flags)
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.a = cpu.y;
    cpu.flags.update_zero_negative(cpu.a);
    Ok(cpu.flags)
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// X is a data register, so Z and N follow the copied stack pointer.
pub(crate) fn execute_tsx(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.x = cpu.sp;
    cpu.flags.update_zero_negative(cpu.x);
    Ok(cpu.flags)
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Flags affected: None
pub(crate) fn execute_txs(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.sp = cpu.x;
    Ok(cpu.flags)
}
