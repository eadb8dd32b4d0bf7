//! Four-phase door cycle engine
//!
//! All mutation happens in `tick()`, called by the node's main flow once
//! per timer firing; the engine itself never touches hardware. Callers
//! read the actuator command and the timing plan for the current phase
//! after every event.

use super::plan::{PhasePlan, SequenceConfig};
use crate::traits::door::DoorCommand;

/// Door cycle phase
///
/// Transitions are strictly `Idle → Opening → HoldOpen → Closing →
/// Disarmed → Idle`; phases cannot be skipped or reordered, so the door is
/// always fully closed before a new cycle can start. `Disarmed` models the
/// timer teardown between sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No cycle in progress; a new cycle may start
    Idle,
    /// Actuator forward, door unlocking
    Opening,
    /// Actuator stopped, door held open
    HoldOpen,
    /// Actuator reverse, door locking
    Closing,
    /// Cycle complete, timer torn down, awaiting `disarm()`
    Disarmed,
}

/// Events produced by the engine as ticks accumulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceEvent {
    /// A new phase began; re-arm the timer with the current plan and
    /// apply the current door command
    PhaseChanged(Phase),
    /// The cycle finished; raised exactly once per start
    Complete,
}

/// Errors from sequencer control operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// A cycle is already in progress
    Busy,
    /// `disarm()` called before the cycle completed
    NotComplete,
}

/// The door cycle state machine
///
/// Owned by one node; mutated only through `start()`, `tick()`, and
/// `disarm()` from that node's main flow.
#[derive(Debug, Clone)]
pub struct DoorSequencer {
    config: SequenceConfig,
    phase: Phase,
    elapsed_ticks: u8,
}

impl Default for DoorSequencer {
    fn default() -> Self {
        Self::new(SequenceConfig::default())
    }
}

impl DoorSequencer {
    /// Create a sequencer with the given timing configuration
    pub fn new(config: SequenceConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            elapsed_ticks: 0,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Timing plan for the current phase, if one is active
    pub fn plan(&self) -> Option<PhasePlan> {
        match self.phase {
            Phase::Opening => Some(self.config.opening),
            Phase::HoldOpen => Some(self.config.hold_open),
            Phase::Closing => Some(self.config.closing),
            Phase::Idle | Phase::Disarmed => None,
        }
    }

    /// Actuator command for the current phase
    pub fn door_command(&self) -> DoorCommand {
        match self.phase {
            Phase::Opening => DoorCommand::opening(),
            Phase::Closing => DoorCommand::closing(),
            Phase::HoldOpen | Phase::Idle | Phase::Disarmed => DoorCommand::stopped(),
        }
    }

    /// Begin a new cycle
    ///
    /// Only valid from `Idle`; returns the plan to arm the timer with.
    /// A cycle in progress (including one awaiting `disarm()`) rejects
    /// the request.
    pub fn start(&mut self) -> Result<PhasePlan, SequenceError> {
        if self.phase != Phase::Idle {
            return Err(SequenceError::Busy);
        }

        self.phase = Phase::Opening;
        self.elapsed_ticks = 0;
        Ok(self.config.opening)
    }

    /// Record one timer firing
    ///
    /// Returns an event when the firing completed a phase. Ticks arriving
    /// while no phase is active are ignored.
    pub fn tick(&mut self) -> Option<SequenceEvent> {
        let target = self.plan()?.target_ticks;

        self.elapsed_ticks += 1;
        if self.elapsed_ticks < target {
            return None;
        }
        self.elapsed_ticks = 0;

        match self.phase {
            Phase::Opening => {
                self.phase = Phase::HoldOpen;
                Some(SequenceEvent::PhaseChanged(Phase::HoldOpen))
            }
            Phase::HoldOpen => {
                self.phase = Phase::Closing;
                Some(SequenceEvent::PhaseChanged(Phase::Closing))
            }
            Phase::Closing => {
                self.phase = Phase::Disarmed;
                Some(SequenceEvent::Complete)
            }
            Phase::Idle | Phase::Disarmed => None,
        }
    }

    /// Tear down after a completed cycle
    ///
    /// Only valid from `Disarmed`; returns the engine to `Idle` so a new
    /// cycle may start.
    pub fn disarm(&mut self) -> Result<(), SequenceError> {
        if self.phase != Phase::Disarmed {
            return Err(SequenceError::NotComplete);
        }
        self.phase = Phase::Idle;
        Ok(())
    }
}
