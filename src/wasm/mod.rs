//! WebAssembly bindings for the emulator.
//!
//! This module provides a JavaScript-callable wrapper around a flat-memory
//! machine, enabling browser-based stepping and inspection.

pub mod api;

pub use api::WasmMachine;
