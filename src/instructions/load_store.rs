//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded value. Stores write the register to
//! memory and change neither the register nor the flags.

use crate::{AddressingMode, ExecutionError, FlagRegister, ProcessorState};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.a = cpu.resolve_value(mode)?;
    cpu.flags.update_zero_negative(cpu.a);
    Ok(cpu.flags)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.x = cpu.resolve_value(mode)?;
    cpu.flags.update_zero_negative(cpu.x);
    Ok(cpu.flags)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.y = cpu.resolve_value(mode)?;
    cpu.flags.update_zero_negative(cpu.y);
    Ok(cpu.flags)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_sta(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    let addr = cpu.resolve_address(mode)?;
    cpu.bus.write8(addr, cpu.a);
    Ok(cpu.flags)
}

/// Executes the STX (Store X Register) instruction.
///
/// Flags affected: None
pub(crate) fn execute_stx(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    let addr = cpu.resolve_address(mode)?;
    cpu.bus.write8(addr, cpu.x);
    Ok(cpu.flags)
}

/// Executes the STY (Store Y Register) instruction.
///
/// Flags affected: None
pub(crate) fn execute_sty(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    let addr = cpu.resolve_address(mode)?;
    cpu.bus.write8(addr, cpu.y);
    Ok(cpu.flags)
}
