//! Hardware driver implementations for the SentryLock door lock
//!
//! Drivers implement the core capability traits on top of the bus-level
//! HAL traits. The only driver the lock core needs is the external EEPROM
//! credential store; actuator and alarm electronics sit entirely behind
//! their core traits.

#![no_std]
#![deny(unsafe_code)]

pub mod store;

pub use store::{EepromStore, StoreConfig};
