//! Periodic tick source trait

/// Errors from the tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickError {
    /// The timer stopped firing within the implementation's wait bound
    Stalled,
}

/// Trait for the periodic timer-compare event source
///
/// This is the node's only notion of elapsed time. `wait()` is a
/// capacity-one rendezvous with the timer interrupt: it blocks until the
/// next firing, and all sequencer mutation happens in the main flow after
/// it returns. No state is mutated in interrupt context.
pub trait TickSource {
    /// Arm the timer to fire every `period_ms` milliseconds
    ///
    /// Re-arming while armed restarts the interval with the new period.
    fn start(&mut self, period_ms: u32);

    /// Block until the next firing
    fn wait(&mut self) -> Result<(), TickError>;

    /// Disarm the timer
    fn stop(&mut self);
}
