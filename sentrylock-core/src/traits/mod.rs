//! Device-level capability traits
//!
//! These traits define the interface between the node logic and the
//! excluded hardware components: door actuator, alarm, credential EEPROM,
//! periodic timer, keypad, and character display.

pub mod alarm;
pub mod door;
pub mod panel;
pub mod store;
pub mod tick;

pub use alarm::AlarmOutput;
pub use door::{DoorCommand, DoorDirection, DoorDrive};
pub use panel::{Keypad, PasswordPrompt, Screen, StatusDisplay};
pub use store::{CredentialStore, StoreError};
pub use tick::{TickError, TickSource};
