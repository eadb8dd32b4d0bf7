//! Inter-node wire protocol for the SentryLock door lock
//!
//! This crate defines the UART-based protocol between the HMI node (keypad
//! and status display) and the control node (credential store, door, alarm).
//! The link is byte-oriented and half-duplex: one side sends, the other
//! answers.
//!
//! # Protocol overview
//!
//! Three payload kinds travel on the wire:
//!
//! ```text
//! password:  ASCII chars followed by a '#' sentinel (no length prefix)
//! menu:      one byte, '+' (open door) or '-' (change password)
//! outcome:   one byte, 0 = mismatched, 1 = matched, 2 = locked
//! ```
//!
//! The HMI acts as a dumb terminal: it captures input and renders
//! status; every security decision is made on the control node.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{FrameError, PasswordDeframer, FRAMED_MAX, MAX_PASSWORD_LEN, SENTINEL};
pub use messages::{MenuChoice, Outcome};
