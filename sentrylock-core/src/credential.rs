//! Password and credential record types
//!
//! A password is 1 to 6 printable ASCII characters, captured at the keypad
//! or decoded from the wire. The persisted credential is the same value
//! padded with NUL bytes to a fixed six-byte record, so comparison against
//! storage has C-string semantics: the record matches exactly when the
//! characters and the terminating padding agree.

use heapless::Vec;
use sentrylock_protocol::{MAX_PASSWORD_LEN, SENTINEL};

/// Length of the persisted credential record in bytes
pub const CREDENTIAL_LEN: usize = MAX_PASSWORD_LEN;

/// Errors from password validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PasswordError {
    /// Password has no characters
    Empty,
    /// Password exceeds the maximum length
    TooLong,
    /// Password contains a byte outside printable ASCII
    NonPrintable,
    /// Password contains the frame sentinel character
    ReservedChar,
}

/// A validated password entry
///
/// No `defmt::Format` derive: the password is the only secret in the
/// system and must not reach a log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password {
    bytes: Vec<u8, MAX_PASSWORD_LEN>,
}

impl Password {
    /// Validate raw bytes as a password
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PasswordError> {
        if bytes.is_empty() {
            return Err(PasswordError::Empty);
        }
        if bytes.len() > MAX_PASSWORD_LEN {
            return Err(PasswordError::TooLong);
        }
        for &byte in bytes {
            if byte == SENTINEL {
                return Err(PasswordError::ReservedChar);
            }
            if !(0x20..=0x7E).contains(&byte) {
                return Err(PasswordError::NonPrintable);
            }
        }

        let mut buf = Vec::new();
        buf.extend_from_slice(bytes)
            .map_err(|_| PasswordError::TooLong)?;
        Ok(Self { bytes: buf })
    }

    /// The password characters
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the password has no characters
    ///
    /// Always false for a validated password; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The NUL-padded fixed-length record persisted in storage
    pub fn to_record(&self) -> [u8; CREDENTIAL_LEN] {
        let mut record = [0u8; CREDENTIAL_LEN];
        record[..self.bytes.len()].copy_from_slice(&self.bytes);
        record
    }
}
