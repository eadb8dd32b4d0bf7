//! Single-byte wire messages
//!
//! Two message kinds are encoded as one byte each: the menu choice sent by
//! the HMI node and the verification outcome sent back by the control node.

// Wire format values for Outcome
const OUTCOME_MISMATCHED: u8 = 0;
const OUTCOME_MATCHED: u8 = 1;
const OUTCOME_LOCKED: u8 = 2;

// Wire format values for MenuChoice
const CHOICE_OPEN_DOOR: u8 = b'+';
const CHOICE_CHANGE_PASSWORD: u8 = b'-';

/// Result of a password comparison, as transmitted on the wire
///
/// Both nodes must agree on the ordinal values. The control node reads
/// ordinal 2 as "intrusion detected" and the HMI as "locked out"; they are
/// the same signal and the same bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The submitted entries (or entry and stored credential) differ
    Mismatched,
    /// The comparison succeeded
    Matched,
    /// Third consecutive failure; the session is locked
    Locked,
}

impl Outcome {
    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            Outcome::Mismatched => OUTCOME_MISMATCHED,
            Outcome::Matched => OUTCOME_MATCHED,
            Outcome::Locked => OUTCOME_LOCKED,
        }
    }

    /// Parse an outcome from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            OUTCOME_MISMATCHED => Some(Outcome::Mismatched),
            OUTCOME_MATCHED => Some(Outcome::Matched),
            OUTCOME_LOCKED => Some(Outcome::Locked),
            _ => None,
        }
    }
}

/// Main-menu selection sent by the HMI node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    /// Challenge the stored credential, then drive the door cycle
    OpenDoor,
    /// Challenge the stored credential, then re-establish it
    ChangePassword,
}

impl MenuChoice {
    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            MenuChoice::OpenDoor => CHOICE_OPEN_DOOR,
            MenuChoice::ChangePassword => CHOICE_CHANGE_PASSWORD,
        }
    }

    /// Parse a choice from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CHOICE_OPEN_DOOR => Some(MenuChoice::OpenDoor),
            CHOICE_CHANGE_PASSWORD => Some(MenuChoice::ChangePassword),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_ordinals() {
        // Wire ordinals are part of the protocol contract
        assert_eq!(Outcome::Mismatched.to_byte(), 0);
        assert_eq!(Outcome::Matched.to_byte(), 1);
        assert_eq!(Outcome::Locked.to_byte(), 2);
    }

    #[test]
    fn test_outcome_roundtrip() {
        for outcome in [Outcome::Mismatched, Outcome::Matched, Outcome::Locked] {
            let byte = outcome.to_byte();
            assert_eq!(Outcome::from_byte(byte), Some(outcome));
        }
    }

    #[test]
    fn test_outcome_unknown_byte() {
        assert_eq!(Outcome::from_byte(3), None);
        assert_eq!(Outcome::from_byte(0xFF), None);
    }

    #[test]
    fn test_choice_bytes() {
        assert_eq!(MenuChoice::OpenDoor.to_byte(), b'+');
        assert_eq!(MenuChoice::ChangePassword.to_byte(), b'-');
    }

    #[test]
    fn test_choice_roundtrip() {
        for choice in [MenuChoice::OpenDoor, MenuChoice::ChangePassword] {
            assert_eq!(MenuChoice::from_byte(choice.to_byte()), Some(choice));
        }
    }

    #[test]
    fn test_choice_unknown_byte() {
        assert_eq!(MenuChoice::from_byte(b'*'), None);
        assert_eq!(MenuChoice::from_byte(0), None);
    }
}
