//! # Flat Memory
//!
//! The reference bus subscriber: 64KB of RAM covering the whole address
//! space (0x0000-0xFFFF), initialized to zero.

use crate::bus::BusSubscriber;

/// Size of the 16-bit address space in bytes.
const ADDRESS_SPACE: usize = 0x1_0000;

/// Simple 64KB flat memory implementation.
///
/// Every address is writable RAM. Useful for tests and for programs that don't
/// need a ROM/RAM split.
///
/// # Examples
///
/// ```
/// use emu6502::{Bus, BusSubscriber, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xE8, 0xEA]); // INX, NOP
/// assert_eq!(memory.read(0x8001), 0xEA);
///
/// let bus = Bus::builder().register_subscriber(Box::new(memory)).build();
/// assert_eq!(bus.read8(0x8000), 0xE8);
/// ```
pub struct FlatMemory {
    data: Box<[u8; ADDRESS_SPACE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory with all bytes zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`.
    ///
    /// Bytes that would run past 0xFFFF wrap around to 0x0000.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut target = addr;
        for &byte in bytes {
            self.data[target as usize] = byte;
            target = target.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl BusSubscriber for FlatMemory {
    fn start_address(&self) -> u16 {
        0x0000
    }

    fn end_address(&self) -> u16 {
        0xFFFF
    }

    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.data[addr as usize] = data;
    }
}
