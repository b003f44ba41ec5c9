//! # Increment and Decrement Instructions
//!
//! - INX, INY: add one to an index register
//! - DEX, DEY: subtract one from an index register
//!
//! All four wrap within 8 bits and update Z and N from the result.

use crate::{AddressingMode, ExecutionError, FlagRegister, ProcessorState};

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.flags.update_zero_negative(cpu.x);
    Ok(cpu.flags)
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.flags.update_zero_negative(cpu.y);
    Ok(cpu.flags)
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.flags.update_zero_negative(cpu.x);
    Ok(cpu.flags)
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(
    cpu: &mut ProcessorState,
    _mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.flags.update_zero_negative(cpu.y);
    Ok(cpu.flags)
}
