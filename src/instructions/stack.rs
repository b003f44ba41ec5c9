//! # Stack Operations
//!
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack is page 0x01 and grows upward in this machine: a push writes at
//! 0x0100 | SP and then increments SP.

use crate::{AddressingMode, ExecutionError, FlagRegister, ProcessorState};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_pha(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.push_stack8(cpu.a);
    Ok(cpu.flags)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes the status byte as-is, the same byte BRK pushes.
pub(crate) fn execute_php(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.push_stack8(cpu.flags.bits());
    Ok(cpu.flags)
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Updates Z and N from the pulled value.
pub(crate) fn execute_pla(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.a = cpu.pop_stack8();
    cpu.flags.update_zero_negative(cpu.a);
    Ok(cpu.flags)
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Replaces every flag with the pulled byte; bit 5 stays set.
pub(crate) fn execute_plp(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    let status = cpu.pop_stack8();
    cpu.flags.restore(status);
    Ok(cpu.flags)
}
