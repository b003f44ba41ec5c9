//! # Processor Status Flags
//!
//! The status register is a single packed byte (NV-BDIZC). Bit 5 has no
//! flag attached and always reads as 1, so a freshly constructed register
//! holds `0x20`.
//!
//! All mutation goes through [`FlagRegister::set_flag`]; the raw byte is only
//! ever observed through [`FlagRegister::bits`].

use std::fmt;

/// Power-on value of the status register (only the reserved bit 5 set).
pub const FLAGS_POWER_ON: u8 = 0b0010_0000;

/// Reserved status bit that always reads as 1.
const RESERVED_BIT: u8 = 0b0010_0000;

/// A named status flag, carrying its bit mask as the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Flag {
    /// Carry (bit 0)
    Carry = 0b0000_0001,
    /// Zero (bit 1)
    Zero = 0b0000_0010,
    /// Interrupt disable (bit 2)
    InterruptDisable = 0b0000_0100,
    /// Decimal mode (bit 3)
    Decimal = 0b0000_1000,
    /// Break command (bit 4)
    BreakCommand = 0b0001_0000,
    /// Overflow (bit 6)
    Overflow = 0b0100_0000,
    /// Negative (bit 7)
    Negative = 0b1000_0000,
}

impl Flag {
    /// All flags, most significant bit first.
    pub const ALL: [Flag; 7] = [
        Flag::Negative,
        Flag::Overflow,
        Flag::BreakCommand,
        Flag::Decimal,
        Flag::InterruptDisable,
        Flag::Zero,
        Flag::Carry,
    ];

    /// Returns the bit mask of this flag.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    fn letter(self) -> char {
        match self {
            Flag::Negative => 'N',
            Flag::Overflow => 'V',
            Flag::BreakCommand => 'B',
            Flag::Decimal => 'D',
            Flag::InterruptDisable => 'I',
            Flag::Zero => 'Z',
            Flag::Carry => 'C',
        }
    }
}

/// Packed 8-bit processor status register.
///
/// # Examples
///
/// ```
/// use emu6502::{Flag, FlagRegister};
///
/// let mut flags = FlagRegister::new();
/// assert_eq!(flags.bits(), 0x20);
///
/// flags.set_flag(Flag::Carry, true).set_flag(Flag::Negative, true);
/// assert!(flags.is_set(Flag::Carry));
/// assert_eq!(flags.bits(), 0xA1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagRegister {
    bits: u8,
}

impl FlagRegister {
    /// Creates a register in its power-on state (`0x20`).
    pub const fn new() -> Self {
        Self {
            bits: FLAGS_POWER_ON,
        }
    }

    /// Sets or clears `flag`, returning `self` for chaining.
    pub fn set_flag(&mut self, flag: Flag, state: bool) -> &mut Self {
        if state {
            self.bits |= flag.mask();
        } else {
            self.bits &= !flag.mask();
        }
        self
    }

    /// Returns true if `flag` is set.
    pub fn is_set(&self, flag: Flag) -> bool {
        self.bits & flag.mask() == flag.mask()
    }

    /// Returns the packed status byte.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Updates Zero and Negative from `value`.
    pub(crate) fn update_zero_negative(&mut self, value: u8) -> &mut Self {
        self.set_flag(Flag::Zero, value == 0)
            .set_flag(Flag::Negative, value & 0x80 != 0)
    }

    /// Restores the whole register from a byte pulled off the stack.
    ///
    /// Bit 5 is forced on regardless of `bits`.
    pub(crate) fn restore(&mut self, bits: u8) {
        self.bits = bits | RESERVED_BIT;
    }
}

impl Default for FlagRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FlagRegister {
    /// Formats as `NV-BDIZC`, with `-` for clear flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in Flag::ALL {
            if flag == Flag::BreakCommand {
                // bit 5 sits between V and B
                f.write_str("1")?;
            }
            let c = if self.is_set(flag) { flag.letter() } else { '-' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
