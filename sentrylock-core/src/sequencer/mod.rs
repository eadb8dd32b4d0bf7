//! Tick-driven actuation sequencing
//!
//! The door cycle and the lockout interval are both measured in firings of
//! a periodic timer-compare event, never in wall-clock sleeps: the timer
//! peripheral's compare range cannot span the longest phase in a single
//! interval, so each phase accumulates a target count of shorter ticks.
//!
//! The [`DoorSequencer`] drives the four-phase door cycle; the sibling
//! [`LockoutDelay`] counts out the alarm interval. They share the one
//! timer resource and are never armed concurrently.

mod delay;
mod engine;
mod plan;

pub use delay::LockoutDelay;
pub use engine::{DoorSequencer, Phase, SequenceError, SequenceEvent};
pub use plan::{PhasePlan, SequenceConfig, LOCKOUT_PLAN};
