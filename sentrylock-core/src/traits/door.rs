//! Door actuator trait

/// Actuation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DoorDirection {
    /// Unlocking motion
    Forward,
    /// Locking motion
    Reverse,
}

/// Current actuator command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DoorCommand {
    /// Drive intensity in percent (0 = stopped)
    pub intensity: u8,
    /// Motion direction
    pub direction: DoorDirection,
}

impl DoorCommand {
    /// Create a stopped command
    pub const fn stopped() -> Self {
        Self {
            intensity: 0,
            direction: DoorDirection::Forward,
        }
    }

    /// Create a full-intensity running command
    pub const fn running(direction: DoorDirection) -> Self {
        Self {
            intensity: 100,
            direction,
        }
    }

    /// Full-intensity forward (unlocking) command
    pub const fn opening() -> Self {
        Self::running(DoorDirection::Forward)
    }

    /// Full-intensity reverse (locking) command
    pub const fn closing() -> Self {
        Self::running(DoorDirection::Reverse)
    }

    /// Returns true if the actuator is stopped
    pub fn is_stopped(&self) -> bool {
        self.intensity == 0
    }
}

/// Trait for the door actuator
///
/// The drive electronics (H-bridge, PWM generation) live behind this
/// trait; applying a command cannot fail at this level.
pub trait DoorDrive {
    /// Apply an actuator command
    fn set(&mut self, command: DoorCommand);
}
