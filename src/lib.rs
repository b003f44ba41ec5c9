//! # 6502 Execution Engine
//!
//! An instruction-level emulator core for the MOS 6502: processor registers,
//! a packed status register, an address-routed memory bus and the
//! fetch-decode-execute step that turns an opcode stream into register and
//! memory mutations.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{Bus, Flag, FlatMemory, InstructionTable, ProcessorState};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x0200, &[0xE8, 0xE8, 0xAA]); // INX, INX, TAX
//!
//! let bus = Bus::builder().register_subscriber(Box::new(memory)).build();
//! let mut cpu = ProcessorState::new(bus);
//! cpu.set_pc(0x0200);
//!
//! let table = InstructionTable::standard();
//! cpu.run(&table, 2).unwrap();
//! assert_eq!(cpu.x(), 0x02);
//!
//! let flags = cpu.step(&table).unwrap();
//! assert_eq!(cpu.x(), cpu.a()); // TAX copied A (0) over X
//! assert!(flags.is_set(Flag::Zero));
//! ```
//!
//! ## Architecture
//!
//! - **Bus**: subscribers are registered on a [`BusBuilder`]; the built
//!   [`Bus`] routes every access to the first subscriber owning the address
//! - **Processor state**: [`ProcessorState`] owns the registers, the
//!   [`FlagRegister`] and the bus, and implements stack operations and
//!   operand resolution for every [`AddressingMode`]
//! - **Dispatch**: an [`InstructionTable`] is a caller-owned value mapping
//!   opcode bytes to [`Instruction`]s; nothing is global
//!
//! ## Modules
//!
//! - `flags` - Status flags and the packed flag register
//! - `addressing` - Addressing mode enumeration
//! - `bus` - BusSubscriber trait and the routing bus
//! - `memory` - Flat 64KB reference subscriber
//! - `cpu` - Processor state, stack and operand resolution
//! - `opcodes` - Instruction and instruction table

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::{Bus, BusBuilder, BusSubscriber};
pub use cpu::{ProcessorState, IRQ_VECTOR, STACK_PAGE};
pub use flags::{Flag, FlagRegister, FLAGS_POWER_ON};
pub use memory::FlatMemory;
pub use opcodes::{execute, Handler, Instruction, InstructionTable};

/// Errors that can occur while executing an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched opcode has no entry in the instruction table.
    ///
    /// Contains the opcode byte value for debugging purposes.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),

    /// An operand resolver was asked for a mode it cannot resolve.
    ///
    /// This points at a badly built instruction table, not at the program
    /// being executed.
    #[error("{mode:?} addressing is not supported by the {resolver} resolver")]
    UnsupportedAddressingMode {
        /// Mode that was requested
        mode: AddressingMode,
        /// Which resolver rejected it (`"address"` or `"value"`)
        resolver: &'static str,
    },
}
