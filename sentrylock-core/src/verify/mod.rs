//! Credential verification
//!
//! The two comparison operations of the protocol, plus the retry/lockout
//! state machine that counts consecutive failures. Both comparisons
//! produce a wire [`Outcome`]; neither ever produces [`Outcome::Locked`]
//! on its own, since locking is the retry machine's decision.

pub mod retry;

pub use retry::{RetrySession, MAX_ATTEMPTS};

use crate::credential::{Password, CREDENTIAL_LEN};
use sentrylock_protocol::Outcome;

/// Compare two freshly captured entries of a new credential
///
/// On `Matched` the caller persists `first`; on `Mismatched` nothing is
/// written and both entries are re-prompted from scratch.
pub fn establish(first: &Password, second: &Password) -> Outcome {
    if first == second {
        Outcome::Matched
    } else {
        Outcome::Mismatched
    }
}

/// Compare a single entry against the persisted credential record
///
/// The entry is padded to record length before comparison, so a stored
/// record and an entry match exactly when characters and padding agree.
/// Against a store that was never written this compares whatever bytes
/// are persisted; erased storage can never equal a printable password.
pub fn challenge(entry: &Password, stored: &[u8; CREDENTIAL_LEN]) -> Outcome {
    if entry.to_record() == *stored {
        Outcome::Matched
    } else {
        Outcome::Mismatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(bytes: &[u8]) -> Password {
        Password::from_bytes(bytes).unwrap()
    }

    #[test]
    fn test_establish_matched() {
        let outcome = establish(&password(b"1234"), &password(b"1234"));
        assert_eq!(outcome, Outcome::Matched);
    }

    #[test]
    fn test_establish_mismatched() {
        let outcome = establish(&password(b"1234"), &password(b"4321"));
        assert_eq!(outcome, Outcome::Mismatched);
    }

    #[test]
    fn test_establish_length_difference() {
        let outcome = establish(&password(b"1234"), &password(b"12345"));
        assert_eq!(outcome, Outcome::Mismatched);
    }

    #[test]
    fn test_challenge_matched() {
        let stored = password(b"1234").to_record();
        assert_eq!(challenge(&password(b"1234"), &stored), Outcome::Matched);
    }

    #[test]
    fn test_challenge_mismatched() {
        let stored = password(b"1234").to_record();
        assert_eq!(challenge(&password(b"0000"), &stored), Outcome::Mismatched);
    }

    #[test]
    fn test_challenge_prefix_does_not_match() {
        // "1234" stored, "123" entered: padding differs
        let stored = password(b"1234").to_record();
        assert_eq!(challenge(&password(b"123"), &stored), Outcome::Mismatched);
    }

    #[test]
    fn test_challenge_against_erased_store() {
        let stored = [0xFFu8; CREDENTIAL_LEN];
        assert_eq!(
            challenge(&password(b"1234"), &stored),
            Outcome::Mismatched
        );
    }
}
