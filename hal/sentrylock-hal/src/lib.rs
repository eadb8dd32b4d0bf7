//! Bus-level hardware abstraction traits for SentryLock nodes
//!
//! These traits define the boundary between the node logic and the
//! chip-specific peripherals:
//!
//! - Serial port (the inter-node link)
//! - Byte-addressed storage bus (the credential EEPROM)
//!
//! Register-level peripheral setup, pin I/O, and PWM generation live
//! entirely behind implementations of these traits.

#![no_std]
#![deny(unsafe_code)]

pub mod serial;
pub mod storage;

pub use serial::{DataBits, Parity, SerialConfig, SerialPort, StopBits};
pub use storage::{BusConfig, StorageBus};
