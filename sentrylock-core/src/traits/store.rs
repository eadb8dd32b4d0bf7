//! Credential store trait

use crate::credential::CREDENTIAL_LEN;

/// Errors from credential store operations
///
/// A failed bus transaction always surfaces; callers never continue with
/// undefined record data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// A bus transaction was not acknowledged
    Nack,
    /// The storage device did not respond
    Timeout,
}

/// Trait for the persistent credential record
///
/// The record is exactly [`CREDENTIAL_LEN`] raw bytes at a fixed location;
/// there is no checksum and no version tag.
pub trait CredentialStore {
    /// Read the full credential record
    fn read_all(&mut self) -> Result<[u8; CREDENTIAL_LEN], StoreError>;

    /// Overwrite the full credential record
    ///
    /// A write interrupted partway leaves a corrupted record with no way
    /// to detect it; accepted risk of the storage layout.
    fn write_all(&mut self, record: &[u8; CREDENTIAL_LEN]) -> Result<(), StoreError>;
}
