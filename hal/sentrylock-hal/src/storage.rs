//! Persistent storage bus abstractions
//!
//! Provides the byte-addressed bus trait for the external credential
//! EEPROM, to be implemented by a two-wire bus master (or an in-memory
//! array in tests).

/// Byte-addressed persistent storage bus
///
/// Each call is one independent bus transaction. The storage medium needs
/// a settling delay between consecutive write transactions; that delay is
/// owned by the adapter layered on top of this trait, not by the bus.
pub trait StorageBus {
    /// Error type for bus operations
    type Error;

    /// Read one byte at the given address
    fn read_byte(&mut self, address: u16) -> Result<u8, Self::Error>;

    /// Write one byte at the given address
    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), Self::Error>;
}

/// Storage bus configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusConfig {
    /// Bus clock frequency in Hz
    pub frequency: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl BusConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}
