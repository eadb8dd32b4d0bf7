//! External EEPROM credential store
//!
//! The credential record occupies six consecutive byte addresses starting
//! at a fixed base offset, first character first. Each byte is one
//! independent bus transaction, and the device needs a settling delay
//! after every write before it accepts the next transaction.

use embedded_hal::delay::DelayNs;
use sentrylock_core::credential::CREDENTIAL_LEN;
use sentrylock_core::traits::{CredentialStore, StoreError};
use sentrylock_hal::StorageBus;

/// Credential store configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoreConfig {
    /// First byte address of the credential record
    pub base_address: u16,
    /// Settling delay after each write transaction, in milliseconds
    pub settle_delay_ms: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_address: 0x0010,
            settle_delay_ms: 10,
        }
    }
}

/// Credential store over a byte-addressed EEPROM bus
pub struct EepromStore<B, D> {
    bus: B,
    delay: D,
    config: StoreConfig,
}

impl<B, D> EepromStore<B, D>
where
    B: StorageBus,
    D: DelayNs,
{
    /// Create a store with the default address layout
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_config(bus, delay, StoreConfig::default())
    }

    /// Create a store with an explicit configuration
    pub fn with_config(bus: B, delay: D, config: StoreConfig) -> Self {
        Self { bus, delay, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn settle(&mut self) {
        self.delay.delay_ms(self.config.settle_delay_ms);
    }
}

impl<B, D> CredentialStore for EepromStore<B, D>
where
    B: StorageBus,
    D: DelayNs,
{
    fn read_all(&mut self) -> Result<[u8; CREDENTIAL_LEN], StoreError> {
        let mut record = [0u8; CREDENTIAL_LEN];
        for (offset, slot) in record.iter_mut().enumerate() {
            let address = self.config.base_address + offset as u16;
            *slot = self
                .bus
                .read_byte(address)
                .map_err(|_| StoreError::Nack)?;
            self.settle();
        }
        Ok(record)
    }

    fn write_all(&mut self, record: &[u8; CREDENTIAL_LEN]) -> Result<(), StoreError> {
        for (offset, &byte) in record.iter().enumerate() {
            let address = self.config.base_address + offset as u16;
            self.bus
                .write_byte(address, byte)
                .map_err(|_| StoreError::Nack)?;
            self.settle();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory bus covering the credential address range
    struct MemBus {
        cells: [u8; 64],
        fail_at: Option<u16>,
    }

    impl MemBus {
        fn new() -> Self {
            Self {
                cells: [0xFF; 64],
                fail_at: None,
            }
        }
    }

    impl StorageBus for MemBus {
        type Error = ();

        fn read_byte(&mut self, address: u16) -> Result<u8, ()> {
            if self.fail_at == Some(address) {
                return Err(());
            }
            Ok(self.cells[address as usize])
        }

        fn write_byte(&mut self, address: u16, value: u8) -> Result<(), ()> {
            if self.fail_at == Some(address) {
                return Err(());
            }
            self.cells[address as usize] = value;
            Ok(())
        }
    }

    /// Delay that counts invocations instead of sleeping
    #[derive(Default)]
    struct CountingDelay {
        calls: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, _ns: u32) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_write_lands_at_base_address() {
        let mut store = EepromStore::new(MemBus::new(), CountingDelay::default());
        store.write_all(b"1234\0\0").unwrap();

        let base = store.config().base_address as usize;
        assert_eq!(&store.bus.cells[base..base + CREDENTIAL_LEN], b"1234\0\0");
    }

    #[test]
    fn test_read_back() {
        let mut store = EepromStore::new(MemBus::new(), CountingDelay::default());
        store.write_all(b"abc\0\0\0").unwrap();
        assert_eq!(store.read_all().unwrap(), *b"abc\0\0\0");
    }

    #[test]
    fn test_erased_device_reads_ff() {
        let mut store = EepromStore::new(MemBus::new(), CountingDelay::default());
        assert_eq!(store.read_all().unwrap(), [0xFF; CREDENTIAL_LEN]);
    }

    #[test]
    fn test_settle_delay_per_byte() {
        let mut store = EepromStore::new(MemBus::new(), CountingDelay::default());
        store.write_all(b"123456").unwrap();
        assert_eq!(store.delay.calls, CREDENTIAL_LEN as u32);
    }

    #[test]
    fn test_bus_fault_surfaces() {
        let mut bus = MemBus::new();
        bus.fail_at = Some(0x0012);
        let mut store = EepromStore::new(bus, CountingDelay::default());

        assert_eq!(store.write_all(b"123456"), Err(StoreError::Nack));
        assert_eq!(store.read_all(), Err(StoreError::Nack));
    }

    #[test]
    fn test_custom_base_address() {
        let config = StoreConfig {
            base_address: 0x0020,
            settle_delay_ms: 10,
        };
        let mut store = EepromStore::with_config(MemBus::new(), CountingDelay::default(), config);
        store.write_all(b"zz\0\0\0\0").unwrap();
        assert_eq!(&store.bus.cells[0x20..0x26], b"zz\0\0\0\0");
    }
}
