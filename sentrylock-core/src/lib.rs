//! Node-agnostic core logic for the SentryLock door lock
//!
//! This crate contains all logic shared by the two nodes that does not
//! depend on specific hardware implementations:
//!
//! - The validated password/credential type
//! - Verification comparisons and the retry/lockout state machine
//! - The tick-driven door actuation sequencer and lockout delay
//! - Device-level capability traits (door drive, alarm, credential store,
//!   tick source, keypad, status display)

#![no_std]
#![deny(unsafe_code)]

pub mod credential;
pub mod sequencer;
pub mod session;
pub mod traits;
pub mod verify;
