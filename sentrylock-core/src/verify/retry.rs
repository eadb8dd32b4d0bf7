//! Retry/lockout state machine
//!
//! Counts consecutive challenge failures within one session. The third
//! failure is terminal: the session locks, the alarm fires, and no further
//! input is read until the lockout interval has elapsed. A success at any
//! earlier count ends the session with the counter reset for the next one.

use sentrylock_protocol::Outcome;

/// Consecutive failures that trigger a lockout
pub const MAX_ATTEMPTS: u8 = 3;

/// Per-session retry state
///
/// `Active(n)` holds the number of consecutive failures so far, always
/// below [`MAX_ATTEMPTS`]. `Locked` is terminal for the session: no
/// transition leaves it, and every new session starts a fresh machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RetrySession {
    /// Session in progress with the given failure count
    Active(u8),
    /// Third consecutive failure reached
    Locked,
}

impl Default for RetrySession {
    fn default() -> Self {
        Self::new()
    }
}

impl RetrySession {
    /// Start a fresh session with zero failures
    pub fn new() -> Self {
        RetrySession::Active(0)
    }

    /// Number of consecutive failures recorded so far
    pub fn failures(&self) -> u8 {
        match self {
            RetrySession::Active(count) => *count,
            RetrySession::Locked => MAX_ATTEMPTS,
        }
    }

    /// Returns true once the session has locked
    pub fn is_locked(&self) -> bool {
        matches!(self, RetrySession::Locked)
    }

    /// Process a comparison outcome and return the next state
    ///
    /// This is the core transition logic. `Outcome::Locked` is never fed
    /// in (comparisons only produce matched/mismatched); it leaves the
    /// state unchanged.
    pub fn apply(self, outcome: Outcome) -> Self {
        use RetrySession::*;

        match (self, outcome) {
            (Active(_), Outcome::Matched) => Active(0),
            (Active(count), Outcome::Mismatched) => {
                if count + 1 < MAX_ATTEMPTS {
                    Active(count + 1)
                } else {
                    Locked
                }
            }
            // Locked is terminal for the session
            (Locked, _) => Locked,
            (state, Outcome::Locked) => state,
        }
    }
}
