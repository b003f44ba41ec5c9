//! # Memory Bus
//!
//! The bus routes byte and word accesses to the device ("subscriber") that
//! owns the target address.
//!
//! ## Address Routing
//!
//! Subscribers are kept in registration order. For every access the bus
//! consults the first subscriber whose inclusive `[start, end]` range contains
//! the address; later subscribers with overlapping ranges are shadowed. At
//! most one subscriber is consulted per byte.
//!
//! Accesses that hit no subscriber are not errors: reads yield `0x00` and
//! writes are dropped.
//!
//! ## Registration
//!
//! Subscribers are registered on a [`BusBuilder`]. Calling
//! [`BusBuilder::build`] produces a [`Bus`] whose subscriber list can no
//! longer change, so nothing can remap memory while instructions execute.
//!
//! # Example
//!
//! ```rust
//! use emu6502::{Bus, FlatMemory};
//!
//! let mut bus = Bus::builder()
//!     .register_subscriber(Box::new(FlatMemory::new()))
//!     .build();
//!
//! bus.write16(0xFFFE, 0x1234);
//! assert_eq!(bus.read8(0xFFFE), 0x34);
//! assert_eq!(bus.read8(0xFFFF), 0x12);
//! assert_eq!(bus.read16(0xFFFE), 0x1234);
//! ```

use tracing::{debug, trace};

/// A device attached to the bus, owning an inclusive address range.
///
/// Reads and writes receive the absolute bus address. They must never panic
/// for an address inside the subscriber's own range.
///
/// # Examples
///
/// ```rust
/// use emu6502::BusSubscriber;
///
/// /// 256 bytes of RAM mirrored nowhere, mapped at 0x0200.
/// struct PageRam {
///     data: [u8; 256],
/// }
///
/// impl BusSubscriber for PageRam {
///     fn start_address(&self) -> u16 {
///         0x0200
///     }
///
///     fn end_address(&self) -> u16 {
///         0x02FF
///     }
///
///     fn read(&self, addr: u16) -> u8 {
///         self.data[(addr - 0x0200) as usize]
///     }
///
///     fn write(&mut self, addr: u16, data: u8) {
///         self.data[(addr - 0x0200) as usize] = data;
///     }
/// }
///
/// let ram = PageRam { data: [0; 256] };
/// assert!(ram.owns(0x02FF));
/// assert!(!ram.owns(0x0300));
/// ```
pub trait BusSubscriber {
    /// First address owned by this subscriber (inclusive).
    fn start_address(&self) -> u16;

    /// Last address owned by this subscriber (inclusive).
    fn end_address(&self) -> u16;

    /// Returns true if `addr` falls inside `[start_address, end_address]`.
    fn owns(&self, addr: u16) -> bool {
        self.start_address() <= addr && addr <= self.end_address()
    }

    /// Reads the byte at absolute address `addr`.
    fn read(&self, addr: u16) -> u8;

    /// Writes `data` at absolute address `addr`.
    fn write(&mut self, addr: u16, data: u8);
}

/// Collects subscribers in priority order before the bus is frozen.
#[derive(Default)]
pub struct BusBuilder {
    subscribers: Vec<Box<dyn BusSubscriber>>,
}

impl BusBuilder {
    /// Creates a builder with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `subscriber` to the registration list.
    ///
    /// Overlapping ranges are allowed; the subscriber registered first wins.
    pub fn register_subscriber(mut self, subscriber: Box<dyn BusSubscriber>) -> Self {
        debug!(
            start = subscriber.start_address(),
            end = subscriber.end_address(),
            priority = self.subscribers.len(),
            "registering bus subscriber"
        );
        self.subscribers.push(subscriber);
        self
    }

    /// Freezes the registration list and returns the bus.
    pub fn build(self) -> Bus {
        debug!(subscribers = self.subscribers.len(), "bus built");
        Bus {
            subscribers: self.subscribers,
        }
    }
}

/// Address-routed memory bus with a frozen subscriber list.
#[derive(Default)]
pub struct Bus {
    subscribers: Vec<Box<dyn BusSubscriber>>,
}

impl Bus {
    /// Starts building a bus.
    pub fn builder() -> BusBuilder {
        BusBuilder::new()
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Reads one byte. Unmapped addresses read as `0x00`.
    pub fn read8(&self, addr: u16) -> u8 {
        match self.find_subscriber(addr) {
            Some(subscriber) => subscriber.read(addr),
            None => {
                trace!(addr, "unmapped read");
                0x00
            }
        }
    }

    /// Writes one byte. Writes to unmapped addresses are dropped.
    pub fn write8(&mut self, addr: u16, data: u8) {
        match self.find_subscriber_mut(addr) {
            Some(subscriber) => subscriber.write(addr, data),
            None => trace!(addr, "unmapped write dropped"),
        }
    }

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000. Each byte is routed
    /// on its own, so a word may straddle two subscribers.
    pub fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr) as u16;
        let hi = self.read8(addr.wrapping_add(1)) as u16;
        lo | (hi << 8)
    }

    /// Writes a little-endian word: low byte at `addr`, then high byte at
    /// `addr + 1` (wrapping from 0xFFFF to 0x0000).
    pub fn write16(&mut self, addr: u16, data: u16) {
        self.write8(addr, (data & 0xFF) as u8);
        self.write8(addr.wrapping_add(1), (data >> 8) as u8);
    }

    fn find_subscriber(&self, addr: u16) -> Option<&dyn BusSubscriber> {
        self.subscribers
            .iter()
            .find(|s| s.owns(addr))
            .map(|s| s.as_ref())
    }

    fn find_subscriber_mut(&mut self, addr: u16) -> Option<&mut dyn BusSubscriber> {
        for subscriber in &mut self.subscribers {
            if subscriber.owns(addr) {
                return Some(subscriber.as_mut());
            }
        }
        None
    }
}
