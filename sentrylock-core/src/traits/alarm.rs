//! Intrusion alarm trait

/// Trait for the intrusion alarm output
///
/// The buzzer driving electronics live behind this trait; switching the
/// output cannot fail at this level.
pub trait AlarmOutput {
    /// Switch the alarm on or off
    fn set(&mut self, on: bool);
}
