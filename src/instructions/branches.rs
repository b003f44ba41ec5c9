//! # Branch Instructions
//!
//! Conditional branches on a single flag:
//! - BCC / BCS: Carry clear / set
//! - BNE / BEQ: Zero clear / set
//! - BPL / BMI: Negative clear / set
//! - BVC / BVS: Overflow clear / set
//!
//! All branches use relative addressing. The offset byte is always consumed;
//! PC moves to the target only when the condition holds. No flags are
//! affected.

use crate::{AddressingMode, ExecutionError, Flag, FlagRegister, ProcessorState};

fn branch_if(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
    flag: Flag,
    state: bool,
) -> Result<FlagRegister, ExecutionError> {
    let target = cpu.resolve_address(mode)?;
    if cpu.flags.is_set(flag) == state {
        cpu.pc = target;
    }
    Ok(cpu.flags)
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Carry, false)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Carry, true)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Zero, true)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Zero, false)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Negative, true)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Negative, false)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Overflow, false)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs(
    cpu: &mut ProcessorState,
    mode: AddressingMode,
) -> Result<FlagRegister, ExecutionError> {
    branch_if(cpu, mode, Flag::Overflow, true)
}
