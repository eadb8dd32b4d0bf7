//! Session mode selection
//!
//! A node is always in exactly one of three modes: establishing a fresh
//! credential, challenging for a door-open, or challenging for a password
//! change. A single enum makes the exactly-one-at-a-time rule structural.

use sentrylock_protocol::MenuChoice;

/// Which flow the node is currently executing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionMode {
    /// Double-entry capture of a new credential
    EstablishCredential,
    /// Single-entry challenge followed by the door cycle
    OpenDoor,
    /// Single-entry challenge followed by re-establishment
    ChangePassword,
}

impl From<MenuChoice> for SessionMode {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::OpenDoor => SessionMode::OpenDoor,
            MenuChoice::ChangePassword => SessionMode::ChangePassword,
        }
    }
}
