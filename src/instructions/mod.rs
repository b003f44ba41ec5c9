//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone [`Handler`](crate::Handler): it receives
//! the processor and the addressing mode its table entry was built with,
//! resolves its operand through [`ProcessorState`](crate::ProcessorState),
//! and returns the status register after the mutation.
//!
//! ## Categories
//!
//! - **control**: BRK, JMP, NOP
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **inc_dec**: INX, INY, DEX, DEY
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **flags**: CLC, SEC, CLD, SED, CLI, SEI, CLV
//! - **stack**: PHA, PHP, PLA, PLP
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS

pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod stack;
pub mod transfer;
