//! # Processor State and Execution
//!
//! This module contains [`ProcessorState`], the 6502 register file plus the bus
//! it executes against, and the fetch-decode-execute step.
//!
//! ## Processor State
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: packed [`FlagRegister`]
//!
//! ## Stack
//!
//! The stack lives on page 0x01 and is addressed as `0x0100 | SP`. A push
//! writes at SP and then increments it; a pop decrements SP and then reads.
//! SP wraps modulo 256, so stack traffic never leaves page 0x01.
//!
//! ## Operand Resolution
//!
//! [`ProcessorState::resolve_address`] and [`ProcessorState::resolve_value`]
//! consume operand bytes at PC and advance PC past them. Instruction handlers
//! call exactly one of them per execution.

use tracing::debug;

use crate::{
    execute, AddressingMode, Bus, ExecutionError, Flag, FlagRegister, InstructionTable,
};

/// Base address of the stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Location of the little-endian IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// 6502 register file bound to a memory bus.
///
/// # Examples
///
/// ```
/// use emu6502::{Bus, FlatMemory, ProcessorState};
///
/// let bus = Bus::builder()
///     .register_subscriber(Box::new(FlatMemory::new()))
///     .build();
/// let mut cpu = ProcessorState::new(bus);
///
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.sp(), 0x00);
/// assert_eq!(cpu.flags().bits(), 0x20);
///
/// cpu.push_stack8(0x42);
/// assert_eq!(cpu.sp(), 0x01);
/// assert_eq!(cpu.bus().read8(0x0100), 0x42);
/// assert_eq!(cpu.pop_stack8(), 0x42);
/// ```
pub struct ProcessorState {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives the stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) flags: FlagRegister,

    /// Memory bus
    pub(crate) bus: Bus,
}

impl ProcessorState {
    /// Creates a processor bound to `bus` with zeroed registers and
    /// power-on flags (`0x20`).
    pub fn new(bus: Bus) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flags: FlagRegister::new(),
            bus,
        }
    }

    /// Fetches the opcode at PC, advances PC by one and executes it.
    ///
    /// Returns the status register after the instruction.
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::UnimplementedOpcode`] if `table` has no entry for
    ///   the fetched byte. PC has already moved past the opcode.
    /// - [`ExecutionError::UnsupportedAddressingMode`] if the table entry pairs
    ///   a handler with a mode it cannot resolve.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Bus, ExecutionError, FlatMemory, InstructionTable, ProcessorState};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0xEA, 0x02]); // NOP, then an unassigned opcode
    ///
    /// let bus = Bus::builder().register_subscriber(Box::new(memory)).build();
    /// let mut cpu = ProcessorState::new(bus);
    /// let table = InstructionTable::standard();
    ///
    /// cpu.step(&table).unwrap();
    /// assert_eq!(cpu.pc(), 0x0001);
    ///
    /// assert_eq!(cpu.step(&table), Err(ExecutionError::UnimplementedOpcode(0x02)));
    /// ```
    pub fn step(&mut self, table: &InstructionTable) -> Result<FlagRegister, ExecutionError> {
        let opcode = self.fetch8();
        execute(table, opcode, self)
    }

    /// Executes up to `max_instructions` instructions.
    ///
    /// Stops at the first failing instruction and returns its error; otherwise
    /// returns the number of instructions executed.
    pub fn run(
        &mut self,
        table: &InstructionTable,
        max_instructions: usize,
    ) -> Result<usize, ExecutionError> {
        for executed in 0..max_instructions {
            if let Err(err) = self.step(table) {
                debug!(executed, pc = self.pc, %err, "run stopped");
                return Err(err);
            }
        }
        Ok(max_instructions)
    }

    // ========== Stack ==========

    /// Pushes one byte: write at `0x0100 | SP`, then increment SP.
    pub fn push_stack8(&mut self, data: u8) {
        self.bus.write8(Self::stack_address(self.sp), data);
        self.sp = self.sp.wrapping_add(1);
    }

    /// Pops one byte: decrement SP, then read at `0x0100 | SP`.
    pub fn pop_stack8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_sub(1);
        self.bus.read8(Self::stack_address(self.sp))
    }

    /// Pushes a little-endian word (low byte at SP, high byte at SP + 1) and
    /// advances SP by two.
    ///
    /// Both bytes stay on the stack page: at SP = 0xFF the high byte goes to
    /// 0x0100.
    pub fn push_stack16(&mut self, data: u16) {
        self.bus
            .write8(Self::stack_address(self.sp), (data & 0xFF) as u8);
        self.bus
            .write8(Self::stack_address(self.sp.wrapping_add(1)), (data >> 8) as u8);
        self.sp = self.sp.wrapping_add(2);
    }

    /// Retreats SP by two, then reads the little-endian word stored there.
    pub fn pop_stack16(&mut self) -> u16 {
        self.sp = self.sp.wrapping_sub(2);
        let lo = self.bus.read8(Self::stack_address(self.sp)) as u16;
        let hi = self.bus.read8(Self::stack_address(self.sp.wrapping_add(1))) as u16;
        lo | (hi << 8)
    }

    fn stack_address(sp: u8) -> u16 {
        STACK_PAGE | sp as u16
    }

    // ========== Operand Resolution ==========

    /// Resolves the effective address for `mode`, consuming operand bytes.
    ///
    /// - Absolute: word at PC
    /// - AbsoluteX/AbsoluteY: word at PC plus index, wrapping at 0xFFFF
    /// - Indirect: word at PC is a pointer; the word it points at is the
    ///   result. The NMOS page-wrap bug is not reproduced.
    /// - IndexedIndirect: `(zp + X) mod 0x100` locates the pointer
    /// - IndirectIndexed: pointer at zp, plus Y with full 16-bit wraparound
    /// - ZeroPage/ZeroPageX/ZeroPageY: byte at PC, plus index mod 0x100
    /// - Relative: signed byte at PC added to the PC following it
    ///
    /// # Errors
    ///
    /// [`ExecutionError::UnsupportedAddressingMode`] for Implied, Accumulator
    /// and Immediate, which name no memory location. PC is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressingMode, Bus, FlatMemory, ProcessorState};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0xFE]); // zero page operand
    ///
    /// let bus = Bus::builder().register_subscriber(Box::new(memory)).build();
    /// let mut cpu = ProcessorState::new(bus);
    /// cpu.set_x(0x05);
    ///
    /// // 0xFE + 0x05 wraps inside zero page
    /// assert_eq!(cpu.resolve_address(AddressingMode::ZeroPageX).unwrap(), 0x0003);
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn resolve_address(&mut self, mode: AddressingMode) -> Result<u16, ExecutionError> {
        let addr = match mode {
            AddressingMode::Absolute => self.fetch16(),
            AddressingMode::AbsoluteX => self.fetch16().wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.fetch16().wrapping_add(self.y as u16),
            AddressingMode::Indirect => {
                let ptr = self.fetch16();
                self.bus.read16(ptr)
            }
            AddressingMode::IndexedIndirect => {
                let zp = self.fetch8().wrapping_add(self.x);
                self.bus.read16(zp as u16)
            }
            AddressingMode::IndirectIndexed => {
                let zp = self.fetch8();
                self.bus.read16(zp as u16).wrapping_add(self.y as u16)
            }
            AddressingMode::ZeroPage => self.fetch8() as u16,
            AddressingMode::ZeroPageX => self.fetch8().wrapping_add(self.x) as u16,
            AddressingMode::ZeroPageY => self.fetch8().wrapping_add(self.y) as u16,
            AddressingMode::Relative => {
                let offset = self.fetch8() as i8;
                self.pc.wrapping_add_signed(offset as i16)
            }
            AddressingMode::Implied | AddressingMode::Accumulator | AddressingMode::Immediate => {
                return Err(ExecutionError::UnsupportedAddressingMode {
                    mode,
                    resolver: "address",
                });
            }
        };
        Ok(addr)
    }

    /// Resolves the operand value for `mode`.
    ///
    /// Accumulator returns A without touching PC, Immediate consumes one byte
    /// at PC, and every memory mode reads the byte at
    /// [`resolve_address`](Self::resolve_address).
    ///
    /// # Errors
    ///
    /// [`ExecutionError::UnsupportedAddressingMode`] for Implied.
    pub fn resolve_value(&mut self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        match mode {
            AddressingMode::Accumulator => Ok(self.a),
            AddressingMode::Immediate => Ok(self.fetch8()),
            AddressingMode::Implied => Err(ExecutionError::UnsupportedAddressingMode {
                mode,
                resolver: "value",
            }),
            _ => {
                let addr = self.resolve_address(mode)?;
                Ok(self.bus.read8(addr))
            }
        }
    }

    /// Reads the byte at PC and advances PC by one.
    fn fetch8(&mut self) -> u8 {
        let data = self.bus.read8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        data
    }

    /// Reads the little-endian word at PC and advances PC by two.
    fn fetch16(&mut self) -> u16 {
        let data = self.bus.read16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        data
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 | SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns a copy of the status register.
    pub fn flags(&self) -> FlagRegister {
        self.flags
    }

    /// Returns true if `flag` is set.
    pub fn is_set(&self, flag: Flag) -> bool {
        self.flags.is_set(flag)
    }

    /// Returns the bus.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Returns the bus mutably, e.g. to seed memory before execution.
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets or clears one status flag.
    pub fn set_flag(&mut self, flag: Flag, state: bool) {
        self.flags.set_flag(flag, state);
    }
}
