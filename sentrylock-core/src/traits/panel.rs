//! Front-end panel traits (keypad and status display)
//!
//! Keypad scanning and character rendering stay behind these traits; the
//! HMI node only decides *which* prompt or screen is shown. Capture loops
//! block until the user finishes an entry, mirroring the keypad hardware.

use crate::credential::Password;
use sentrylock_protocol::MenuChoice;

/// Which password prompt to display during capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PasswordPrompt {
    /// "Enter password"
    Initial,
    /// "Re-enter the same password"
    Confirm,
}

/// Status screens rendered by the HMI node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Main options: open door / change password
    MainMenu,
    /// A challenge attempt failed; re-prompting
    WrongPassword,
    /// Challenge passed; the credential will be re-established
    ChangeAccepted,
    /// Door cycle: unlocking phase
    DoorUnlocking,
    /// Door cycle: held open
    DoorUnlocked,
    /// Door cycle: locking phase
    DoorLocking,
    /// Three consecutive failures; error shown for the lockout interval
    LockedOut,
}

/// Trait for keypad input capture
///
/// Implementations re-prompt internally until a valid entry is complete,
/// so capture never fails.
pub trait Keypad {
    /// Prompt for and capture one password entry
    fn capture_password(&mut self, prompt: PasswordPrompt) -> Password;

    /// Display the main menu and capture a choice
    ///
    /// Keys other than the two menu keys are ignored.
    fn capture_choice(&mut self) -> MenuChoice;
}

/// Trait for the status display
pub trait StatusDisplay {
    /// Render a status screen
    fn show(&mut self, screen: Screen);
}
