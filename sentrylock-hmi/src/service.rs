//! HMI node service loop
//!
//! Mirrors the control node's flows from the panel side. During a door
//! cycle or a lockout the HMI runs the same tick plans as the control
//! node against its own timer, so the screens track the door without any
//! progress traffic on the link.

use sentrylock_core::credential::Password;
use sentrylock_core::sequencer::{
    DoorSequencer, LockoutDelay, Phase, SequenceConfig, SequenceError, SequenceEvent,
};
use sentrylock_core::traits::{
    Keypad, PasswordPrompt, Screen, StatusDisplay, TickError, TickSource,
};
use sentrylock_hal::SerialPort;
use sentrylock_protocol::{frame, FrameError, MenuChoice, Outcome};

/// Errors that end an HMI session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmiError<E> {
    /// Serial link failure or stall
    Link(E),
    /// A captured password could not be framed
    Frame(FrameError),
    /// Display sequencer misuse
    Sequence(SequenceError),
    /// Tick source stall
    Tick(TickError),
}

/// What one served menu round amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuOutcome {
    /// Challenge passed; the door cycle was displayed to completion
    DoorOpened,
    /// Challenge passed; a fresh credential was established
    PasswordChanged,
    /// Three failures; the lockout screen was held for the full interval
    LockedOut,
}

/// The front-end service
pub struct HmiService<L, K, D, T> {
    link: L,
    keypad: K,
    display: D,
    ticks: T,
    sequencer: DoorSequencer,
    lockout: LockoutDelay,
}

impl<L, K, D, T> HmiService<L, K, D, T>
where
    L: SerialPort,
    K: Keypad,
    D: StatusDisplay,
    T: TickSource,
{
    /// Create a service with the default door timing
    pub fn new(link: L, keypad: K, display: D, ticks: T) -> Self {
        Self::with_config(link, keypad, display, ticks, SequenceConfig::default())
    }

    /// Create a service with explicit door timing
    ///
    /// Both nodes must be built from the same configuration or the
    /// screens will drift from the door.
    pub fn with_config(link: L, keypad: K, display: D, ticks: T, config: SequenceConfig) -> Self {
        Self {
            link,
            keypad,
            display,
            ticks,
            sequencer: DoorSequencer::new(config),
            lockout: LockoutDelay::new(),
        }
    }

    /// Tear the service down, returning the owned peripherals
    pub fn into_parts(self) -> (L, K, D, T) {
        (self.link, self.keypad, self.display, self.ticks)
    }

    /// Run the node: establish a credential once, then serve menu rounds
    ///
    /// Returns only on a fatal error (link stall, malformed frame).
    pub fn run(&mut self) -> Result<(), HmiError<L::Error>> {
        self.establish_credential()?;
        loop {
            self.menu_round()?;
        }
    }

    /// Capture and ship credential pairs until the control node accepts one
    pub fn establish_credential(&mut self) -> Result<(), HmiError<L::Error>> {
        loop {
            let first = self.keypad.capture_password(PasswordPrompt::Initial);
            let second = self.keypad.capture_password(PasswordPrompt::Confirm);

            self.send_entry(&first)?;
            self.send_entry(&second)?;

            if self.recv_outcome()? == Outcome::Matched {
                return Ok(());
            }
        }
    }

    /// Serve one menu round end to end
    pub fn menu_round(&mut self) -> Result<MenuOutcome, HmiError<L::Error>> {
        self.display.show(Screen::MainMenu);
        let choice = self.keypad.capture_choice();
        self.link
            .write_byte(choice.to_byte())
            .map_err(HmiError::Link)?;

        loop {
            let entry = self.keypad.capture_password(PasswordPrompt::Initial);
            self.send_entry(&entry)?;

            match self.recv_outcome()? {
                Outcome::Mismatched => self.display.show(Screen::WrongPassword),
                Outcome::Locked => {
                    self.run_lockout_display()?;
                    return Ok(MenuOutcome::LockedOut);
                }
                Outcome::Matched => {
                    return match choice {
                        MenuChoice::OpenDoor => {
                            self.run_door_display()?;
                            Ok(MenuOutcome::DoorOpened)
                        }
                        MenuChoice::ChangePassword => {
                            self.display.show(Screen::ChangeAccepted);
                            self.establish_credential()?;
                            Ok(MenuOutcome::PasswordChanged)
                        }
                    };
                }
            }
        }
    }

    /// Track the door cycle on the display, phase by phase
    fn run_door_display(&mut self) -> Result<(), HmiError<L::Error>> {
        let plan = self.sequencer.start().map_err(HmiError::Sequence)?;
        self.show_phase(self.sequencer.phase());
        self.ticks.start(plan.period_ms);

        loop {
            self.ticks.wait().map_err(HmiError::Tick)?;

            match self.sequencer.tick() {
                Some(SequenceEvent::PhaseChanged(phase)) => {
                    self.show_phase(phase);
                    if let Some(plan) = self.sequencer.plan() {
                        self.ticks.start(plan.period_ms);
                    }
                }
                Some(SequenceEvent::Complete) => {
                    self.ticks.stop();
                    self.sequencer.disarm().map_err(HmiError::Sequence)?;
                    return Ok(());
                }
                None => {}
            }
        }
    }

    /// Hold the lockout screen for the fixed interval
    fn run_lockout_display(&mut self) -> Result<(), HmiError<L::Error>> {
        self.display.show(Screen::LockedOut);
        let plan = self.lockout.start().map_err(HmiError::Sequence)?;
        self.ticks.start(plan.period_ms);

        loop {
            self.ticks.wait().map_err(HmiError::Tick)?;
            if self.lockout.tick() {
                break;
            }
        }

        self.ticks.stop();
        Ok(())
    }

    fn show_phase(&mut self, phase: Phase) {
        let screen = match phase {
            Phase::Opening => Screen::DoorUnlocking,
            Phase::HoldOpen => Screen::DoorUnlocked,
            Phase::Closing => Screen::DoorLocking,
            Phase::Idle | Phase::Disarmed => return,
        };
        self.display.show(screen);
    }

    fn send_entry(&mut self, entry: &Password) -> Result<(), HmiError<L::Error>> {
        let framed = frame::frame_password(entry.as_bytes()).map_err(HmiError::Frame)?;
        self.link.write(&framed).map_err(HmiError::Link)
    }

    /// Receive an outcome byte, skipping bytes that are not one
    fn recv_outcome(&mut self) -> Result<Outcome, HmiError<L::Error>> {
        loop {
            let byte = self.link.read_byte().map_err(HmiError::Link)?;
            if let Some(outcome) = Outcome::from_byte(byte) {
                return Ok(outcome);
            }
        }
    }
}
