//! Serial link abstractions
//!
//! Provides the blocking serial port trait used for the inter-node link,
//! to be implemented by chip-specific HALs (or in-memory pairs in tests).

/// Byte-oriented serial port
///
/// Reads block until a byte is available. Implementations own the wait
/// bound: a port may block forever or enforce a timeout and surface the
/// stall through its error type. Node logic treats any read/write error
/// as fatal to the session.
pub trait SerialPort {
    /// Error type for link operations
    type Error;

    /// Write all bytes to the link
    ///
    /// Blocks until every byte has been accepted by the transmitter.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte to the link
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write(&[byte])
    }

    /// Read a single byte from the link
    ///
    /// Blocks until a byte arrives or the implementation's wait bound
    /// expires.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// Serial port configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
