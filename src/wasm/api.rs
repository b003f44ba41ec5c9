//! WASM API for the execution engine.
//!
//! Wraps a [`ProcessorState`] on a single [`FlatMemory`] together with the
//! standard [`InstructionTable`].

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::{Bus, FlatMemory, InstructionTable, ProcessorState};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MachineError {
    message: String,
}

#[wasm_bindgen]
impl MachineError {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::ExecutionError> for MachineError {
    fn from(err: crate::ExecutionError) -> Self {
        MachineError {
            message: err.to_string(),
        }
    }
}

/// Browser-facing machine: 64KB flat memory and the standard instruction set.
#[wasm_bindgen]
pub struct WasmMachine {
    cpu: ProcessorState,
    table: InstructionTable,
}

#[wasm_bindgen]
impl WasmMachine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmMachine {
        let bus = Bus::builder()
            .register_subscriber(Box::new(FlatMemory::new()))
            .build();

        WasmMachine {
            cpu: ProcessorState::new(bus),
            table: InstructionTable::standard(),
        }
    }

    /// Copy a program into memory and point PC at its first byte
    pub fn load_program(&mut self, start: u16, program: &[u8]) {
        let mut addr = start;
        for &byte in program {
            self.cpu.bus_mut().write8(addr, byte);
            addr = addr.wrapping_add(1);
        }
        self.cpu.set_pc(start);
    }

    /// Execute a single instruction and return the status byte
    pub fn step(&mut self) -> Result<u8, MachineError> {
        let flags = self.cpu.step(&self.table)?;
        Ok(flags.bits())
    }

    /// Execute up to `count` instructions
    pub fn run(&mut self, count: u32) -> Result<u32, MachineError> {
        let executed = self.cpu.run(&self.table, count as usize)?;
        Ok(executed as u32)
    }

    /// Copy `len` bytes of memory starting at `start`
    pub fn memory(&self, start: u16, len: u16) -> Uint8Array {
        let bytes: Vec<u8> = (0..len)
            .map(|offset| self.cpu.bus().read8(start.wrapping_add(offset)))
            .collect();
        Uint8Array::from(bytes.as_slice())
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.bus_mut().write8(addr, value);
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.flags().bits()
    }

    /// Status register rendered as NV-BDIZC letters
    pub fn status_string(&self) -> String {
        self.cpu.flags().to_string()
    }
}

impl Default for WasmMachine {
    fn default() -> Self {
        Self::new()
    }
}
