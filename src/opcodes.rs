//! # Instruction Table
//!
//! Maps opcode bytes to [`Instruction`]s. A table is an ordinary value built by
//! the caller: [`InstructionTable::standard`] returns a fresh copy of the
//! default instruction set, and [`InstructionTable::new`] an empty table for
//! test doubles or extended sets.
//!
//! Opcodes without an entry are unimplemented; dispatching one fails with
//! [`ExecutionError::UnimplementedOpcode`] instead of skipping it.
//!
//! ## Standard Set
//!
//! | Group | Mnemonics |
//! |-------|-----------|
//! | control | BRK, JMP, NOP |
//! | transfer | TAX, TAY, TXA, TYA, TSX, TXS |
//! | inc/dec | INX, INY, DEX, DEY |
//! | load/store | LDA, LDX, LDY, STA, STX, STY |
//! | flags | CLC, SEC, CLD, SED, CLI, SEI, CLV |
//! | stack | PHA, PHP, PLA, PLP |
//! | branches | BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS |

use std::fmt;

use tracing::{debug, trace};

use crate::instructions::{branches, control, flags, inc_dec, load_store, stack, transfer};
use crate::{AddressingMode, ExecutionError, FlagRegister, ProcessorState};

/// Instruction handler: mutates the processor for one instruction and returns
/// the resulting status register.
pub type Handler = fn(&mut ProcessorState, AddressingMode) -> Result<FlagRegister, ExecutionError>;

/// A named, mode-tagged handler bound to one opcode.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, InstructionTable};
///
/// let table = InstructionTable::standard();
/// let sta = table.get(0x8D).unwrap();
/// assert_eq!(sta.mnemonic(), "STA");
/// assert_eq!(sta.mode(), AddressingMode::Absolute);
/// assert_eq!(sta.size_bytes(), 3);
/// ```
#[derive(Clone, Copy)]
pub struct Instruction {
    handler: Handler,
    mnemonic: &'static str,
    mode: AddressingMode,
}

impl Instruction {
    /// Binds `handler` to a mnemonic and a fixed addressing mode.
    pub const fn new(handler: Handler, mnemonic: &'static str, mode: AddressingMode) -> Self {
        Self {
            handler,
            mnemonic,
            mode,
        }
    }

    /// Instruction mnemonic, for diagnostics.
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Addressing mode passed to the handler.
    pub fn mode(&self) -> AddressingMode {
        self.mode
    }

    /// Encoded size in bytes (opcode plus operands).
    pub fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }

    /// Runs the handler against `cpu` with this instruction's mode.
    pub fn execute(&self, cpu: &mut ProcessorState) -> Result<FlagRegister, ExecutionError> {
        (self.handler)(cpu, self.mode)
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("mode", &self.mode)
            .finish()
    }
}

/// 256-slot opcode dispatch table.
#[derive(Clone)]
pub struct InstructionTable {
    entries: [Option<Instruction>; 256],
}

impl InstructionTable {
    /// Creates a table with no instructions.
    pub fn new() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    /// Builds the standard instruction set.
    pub fn standard() -> Self {
        use AddressingMode::*;

        let entries: [(u8, Handler, &'static str, AddressingMode); 64] = [
            // Control
            (0x00, control::execute_brk, "BRK", Implied),
            (0x4C, control::execute_jmp, "JMP", Absolute),
            (0x6C, control::execute_jmp, "JMP", Indirect),
            (0xEA, control::execute_nop, "NOP", Implied),
            // Transfer
            (0xAA, transfer::execute_tax, "TAX", Implied),
            (0xA8, transfer::execute_tay, "TAY", Implied),
            (0x8A, transfer::execute_txa, "TXA", Implied),
            (0x98, transfer::execute_tya, "TYA", Implied),
            (0xBA, transfer::execute_tsx, "TSX", Implied),
            (0x9A, transfer::execute_txs, "TXS", Implied),
            // Increment / decrement
            (0xE8, inc_dec::execute_inx, "INX", Implied),
            (0xC8, inc_dec::execute_iny, "INY", Implied),
            (0xCA, inc_dec::execute_dex, "DEX", Implied),
            (0x88, inc_dec::execute_dey, "DEY", Implied),
            // LDA
            (0xA9, load_store::execute_lda, "LDA", Immediate),
            (0xA5, load_store::execute_lda, "LDA", ZeroPage),
            (0xB5, load_store::execute_lda, "LDA", ZeroPageX),
            (0xAD, load_store::execute_lda, "LDA", Absolute),
            (0xBD, load_store::execute_lda, "LDA", AbsoluteX),
            (0xB9, load_store::execute_lda, "LDA", AbsoluteY),
            (0xA1, load_store::execute_lda, "LDA", IndexedIndirect),
            (0xB1, load_store::execute_lda, "LDA", IndirectIndexed),
            // LDX
            (0xA2, load_store::execute_ldx, "LDX", Immediate),
            (0xA6, load_store::execute_ldx, "LDX", ZeroPage),
            (0xB6, load_store::execute_ldx, "LDX", ZeroPageY),
            (0xAE, load_store::execute_ldx, "LDX", Absolute),
            (0xBE, load_store::execute_ldx, "LDX", AbsoluteY),
            // LDY
            (0xA0, load_store::execute_ldy, "LDY", Immediate),
            (0xA4, load_store::execute_ldy, "LDY", ZeroPage),
            (0xB4, load_store::execute_ldy, "LDY", ZeroPageX),
            (0xAC, load_store::execute_ldy, "LDY", Absolute),
            (0xBC, load_store::execute_ldy, "LDY", AbsoluteX),
            // STA
            (0x85, load_store::execute_sta, "STA", ZeroPage),
            (0x95, load_store::execute_sta, "STA", ZeroPageX),
            (0x8D, load_store::execute_sta, "STA", Absolute),
            (0x9D, load_store::execute_sta, "STA", AbsoluteX),
            (0x99, load_store::execute_sta, "STA", AbsoluteY),
            (0x81, load_store::execute_sta, "STA", IndexedIndirect),
            (0x91, load_store::execute_sta, "STA", IndirectIndexed),
            // STX
            (0x86, load_store::execute_stx, "STX", ZeroPage),
            (0x96, load_store::execute_stx, "STX", ZeroPageY),
            (0x8E, load_store::execute_stx, "STX", Absolute),
            // STY
            (0x84, load_store::execute_sty, "STY", ZeroPage),
            (0x94, load_store::execute_sty, "STY", ZeroPageX),
            (0x8C, load_store::execute_sty, "STY", Absolute),
            // Flags
            (0x18, flags::execute_clc, "CLC", Implied),
            (0x38, flags::execute_sec, "SEC", Implied),
            (0xD8, flags::execute_cld, "CLD", Implied),
            (0xF8, flags::execute_sed, "SED", Implied),
            (0x58, flags::execute_cli, "CLI", Implied),
            (0x78, flags::execute_sei, "SEI", Implied),
            (0xB8, flags::execute_clv, "CLV", Implied),
            // Stack
            (0x48, stack::execute_pha, "PHA", Implied),
            (0x08, stack::execute_php, "PHP", Implied),
            (0x68, stack::execute_pla, "PLA", Implied),
            (0x28, stack::execute_plp, "PLP", Implied),
            // Branches
            (0x90, branches::execute_bcc, "BCC", Relative),
            (0xB0, branches::execute_bcs, "BCS", Relative),
            (0xF0, branches::execute_beq, "BEQ", Relative),
            (0xD0, branches::execute_bne, "BNE", Relative),
            (0x30, branches::execute_bmi, "BMI", Relative),
            (0x10, branches::execute_bpl, "BPL", Relative),
            (0x50, branches::execute_bvc, "BVC", Relative),
            (0x70, branches::execute_bvs, "BVS", Relative),
        ];

        let mut table = Self::new();
        for (opcode, handler, mnemonic, mode) in entries {
            table.insert(opcode, Instruction::new(handler, mnemonic, mode));
        }
        table
    }

    /// Binds `instruction` to `opcode`, returning the instruction it replaced.
    pub fn insert(&mut self, opcode: u8, instruction: Instruction) -> Option<Instruction> {
        self.entries[opcode as usize].replace(instruction)
    }

    /// Unbinds `opcode`, returning the instruction that was there.
    pub fn remove(&mut self, opcode: u8) -> Option<Instruction> {
        self.entries[opcode as usize].take()
    }

    /// Looks up the instruction bound to `opcode`.
    pub fn get(&self, opcode: u8) -> Option<&Instruction> {
        self.entries[opcode as usize].as_ref()
    }

    /// Number of implemented opcodes.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Returns true if no opcode is implemented.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over implemented opcodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Instruction)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(opcode, entry)| entry.as_ref().map(|i| (opcode as u8, i)))
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InstructionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(opcode, i)| (opcode, i.mnemonic())))
            .finish()
    }
}

/// Dispatches `opcode` through `table` against `cpu`.
///
/// The opcode byte must already have been fetched (PC points at its first
/// operand byte).
///
/// # Errors
///
/// [`ExecutionError::UnimplementedOpcode`] if `table` has no entry for
/// `opcode`; otherwise whatever the handler returns.
///
/// # Examples
///
/// ```
/// use emu6502::{execute, Bus, ExecutionError, InstructionTable, ProcessorState};
///
/// let mut cpu = ProcessorState::new(Bus::default());
/// let table = InstructionTable::standard();
///
/// cpu.set_x(0xFE);
/// execute(&table, 0xE8, &mut cpu).unwrap(); // INX
/// assert_eq!(cpu.x(), 0xFF);
///
/// let empty = InstructionTable::new();
/// assert_eq!(
///     execute(&empty, 0xE8, &mut cpu),
///     Err(ExecutionError::UnimplementedOpcode(0xE8))
/// );
/// ```
pub fn execute(
    table: &InstructionTable,
    opcode: u8,
    cpu: &mut ProcessorState,
) -> Result<FlagRegister, ExecutionError> {
    let Some(instruction) = table.get(opcode) else {
        debug!(opcode, pc = cpu.pc(), "unimplemented opcode");
        return Err(ExecutionError::UnimplementedOpcode(opcode));
    };

    trace!(
        opcode,
        mnemonic = instruction.mnemonic(),
        mode = ?instruction.mode(),
        pc = cpu.pc(),
        "execute"
    );
    instruction.execute(cpu)
}
