//! Front-end HMI node for the SentryLock door lock
//!
//! The HMI node owns the keypad and the status display and nothing else.
//! It captures entries, ships them to the control node over the serial
//! link, and renders whatever the answered outcome implies. It keeps no
//! credential and makes no security decision of its own.

#![no_std]
#![deny(unsafe_code)]

pub mod service;

pub use service::{HmiError, HmiService, MenuOutcome};
