//! Back-end control node for the SentryLock door lock
//!
//! The control node owns every trusted resource: the persisted credential,
//! the door actuator, and the intrusion alarm. It answers the HMI node
//! over the serial link and never trusts anything but the outcome of its
//! own comparisons.

#![no_std]
#![deny(unsafe_code)]

pub mod service;

pub use service::{ControlError, ControlService, Served};
