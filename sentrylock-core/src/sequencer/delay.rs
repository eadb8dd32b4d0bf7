//! Lockout interval counter
//!
//! Single-phase sibling of the door sequencer: counts ticks to hold the
//! alarm/lockout interval open. It borrows the same timer resource and
//! must never be armed while a door cycle is running.

use super::engine::SequenceError;
use super::plan::{PhasePlan, LOCKOUT_PLAN};

/// Tick counter for the fixed lockout interval
#[derive(Debug, Clone, Default)]
pub struct LockoutDelay {
    elapsed_ticks: u8,
    armed: bool,
}

impl LockoutDelay {
    /// Create an idle delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the interval is counting
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Begin the interval; returns the plan to arm the timer with
    pub fn start(&mut self) -> Result<PhasePlan, SequenceError> {
        if self.armed {
            return Err(SequenceError::Busy);
        }
        self.armed = true;
        self.elapsed_ticks = 0;
        Ok(LOCKOUT_PLAN)
    }

    /// Record one timer firing
    ///
    /// Returns true exactly once, when the interval has elapsed; the
    /// delay disarms itself at that point.
    pub fn tick(&mut self) -> bool {
        if !self.armed {
            return false;
        }

        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= LOCKOUT_PLAN.target_ticks {
            self.armed = false;
            self.elapsed_ticks = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_interval() {
        let mut delay = LockoutDelay::new();
        let plan = delay.start().unwrap();
        assert_eq!(plan, LOCKOUT_PLAN);
        assert!(delay.is_armed());

        for _ in 0..LOCKOUT_PLAN.target_ticks - 1 {
            assert!(!delay.tick());
        }
        assert!(delay.tick());
        assert!(!delay.is_armed());
    }

    #[test]
    fn test_elapses_once() {
        let mut delay = LockoutDelay::new();
        delay.start().unwrap();
        for _ in 0..LOCKOUT_PLAN.target_ticks {
            delay.tick();
        }

        // Disarmed: further ticks report nothing
        assert!(!delay.tick());
    }

    #[test]
    fn test_restart_rejected_while_armed() {
        let mut delay = LockoutDelay::new();
        delay.start().unwrap();
        assert_eq!(delay.start(), Err(SequenceError::Busy));
    }

    #[test]
    fn test_reusable_after_elapse() {
        let mut delay = LockoutDelay::new();
        delay.start().unwrap();
        for _ in 0..LOCKOUT_PLAN.target_ticks {
            delay.tick();
        }

        assert!(delay.start().is_ok());
        assert!(delay.is_armed());
    }
}
