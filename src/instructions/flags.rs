//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! All use implied addressing and touch exactly one flag.

use crate::{AddressingMode, ExecutionError, Flag, FlagRegister, ProcessorState};

fn write_flag(cpu: &mut ProcessorState, flag: Flag, state: bool) -> FlagRegister {
    cpu.flags.set_flag(flag, state);
    cpu.flags
}

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(write_flag(cpu, Flag::Carry, false))
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(write_flag(cpu, Flag::Carry, true))
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(write_flag(cpu, Flag::Decimal, false))
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(write_flag(cpu, Flag::Decimal, true))
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(write_flag(cpu, Flag::InterruptDisable, false))
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(write_flag(cpu, Flag::InterruptDisable, true))
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching set instruction; V is otherwise only changed by
/// arithmetic.
pub(crate) fn execute_clv(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    Ok(write_flag(cpu, Flag::Overflow, false))
}
