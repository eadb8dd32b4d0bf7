//! Phase timing plans

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing plan for one phase: the tick source is armed with `period_ms`
/// and the phase completes after `target_ticks` firings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhasePlan {
    /// Tick period in milliseconds
    pub period_ms: u32,
    /// Number of tick firings that complete the phase
    pub target_ticks: u8,
}

impl PhasePlan {
    /// Total phase duration in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.period_ms * self.target_ticks as u32
    }
}

/// Lockout/alarm interval: 8 firings of 7.5 s, one minute total
pub const LOCKOUT_PLAN: PhasePlan = PhasePlan {
    period_ms: 7500,
    target_ticks: 8,
};

/// Timing configuration for the full door cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SequenceConfig {
    /// Actuator forward (unlocking)
    pub opening: PhasePlan,
    /// Actuator stopped, door held open
    pub hold_open: PhasePlan,
    /// Actuator reverse (locking)
    pub closing: PhasePlan,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            // ~15 s as two 7.5 s compares; one interval cannot span it
            opening: PhasePlan {
                period_ms: 7500,
                target_ticks: 2,
            },
            // ~3 s fits a single compare
            hold_open: PhasePlan {
                period_ms: 3000,
                target_ticks: 1,
            },
            closing: PhasePlan {
                period_ms: 7500,
                target_ticks: 2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let config = SequenceConfig::default();
        assert_eq!(config.opening.duration_ms(), 15_000);
        assert_eq!(config.hold_open.duration_ms(), 3_000);
        assert_eq!(config.closing.duration_ms(), 15_000);
    }

    #[test]
    fn test_lockout_duration() {
        assert_eq!(LOCKOUT_PLAN.duration_ms(), 60_000);
    }
}
