//! Control node service loop
//!
//! Coordinates the serial link, credential store, retry machine, door
//! sequencer, and alarm. One service instance is the whole back-end: it
//! serves the initial credential establishment, then answers menu
//! requests until the link dies.

use heapless::Vec;
use sentrylock_core::credential::Password;
use sentrylock_core::sequencer::{
    DoorSequencer, LockoutDelay, SequenceConfig, SequenceError, SequenceEvent,
};
use sentrylock_core::session::SessionMode;
use sentrylock_core::traits::{
    AlarmOutput, CredentialStore, DoorCommand, DoorDrive, StoreError, TickError, TickSource,
};
use sentrylock_core::verify::{self, RetrySession};
use sentrylock_hal::SerialPort;
use sentrylock_protocol::{FrameError, MenuChoice, Outcome, PasswordDeframer, MAX_PASSWORD_LEN};

/// Errors that end a control session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError<E> {
    /// Serial link failure or stall
    Link(E),
    /// Malformed password frame on the wire
    Frame(FrameError),
    /// Credential storage fault
    Store(StoreError),
    /// Door sequencer misuse
    Sequence(SequenceError),
    /// Tick source stall
    Tick(TickError),
}

/// What a served menu request amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Served {
    /// Challenge passed; the door cycle ran to completion
    DoorOpened,
    /// Challenge passed; a fresh credential was established
    PasswordChanged,
    /// Three failures; the alarm interval ran to completion
    LockedOut,
}

/// Result of one challenge session
enum ChallengeResult {
    Passed,
    Locked,
}

/// The back-end service
pub struct ControlService<L, S, M, A, T> {
    link: L,
    store: S,
    door: M,
    alarm: A,
    ticks: T,
    deframer: PasswordDeframer,
    sequencer: DoorSequencer,
    lockout: LockoutDelay,
    mode: SessionMode,
}

impl<L, S, M, A, T> ControlService<L, S, M, A, T>
where
    L: SerialPort,
    S: CredentialStore,
    M: DoorDrive,
    A: AlarmOutput,
    T: TickSource,
{
    /// Create a service with the default door timing
    pub fn new(link: L, store: S, door: M, alarm: A, ticks: T) -> Self {
        Self::with_config(link, store, door, alarm, ticks, SequenceConfig::default())
    }

    /// Create a service with explicit door timing
    pub fn with_config(
        link: L,
        store: S,
        door: M,
        alarm: A,
        ticks: T,
        config: SequenceConfig,
    ) -> Self {
        Self {
            link,
            store,
            door,
            alarm,
            ticks,
            deframer: PasswordDeframer::new(),
            sequencer: DoorSequencer::new(config),
            lockout: LockoutDelay::new(),
            mode: SessionMode::EstablishCredential,
        }
    }

    /// The flow currently being served
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Tear the service down, returning the owned peripherals
    pub fn into_parts(self) -> (L, S, M, A, T) {
        (self.link, self.store, self.door, self.alarm, self.ticks)
    }

    /// Run the node: establish a credential once, then serve requests
    ///
    /// Returns only on a fatal error (link stall, storage fault).
    pub fn run(&mut self) -> Result<(), ControlError<L::Error>> {
        self.serve_establish()?;
        loop {
            self.serve_request()?;
        }
    }

    /// Serve the double-entry credential establishment
    ///
    /// Receives entry pairs until a pair matches; only the final
    /// comparison outcome is answered, one byte per pair. The matched
    /// entry is persisted before returning.
    pub fn serve_establish(&mut self) -> Result<(), ControlError<L::Error>> {
        self.mode = SessionMode::EstablishCredential;

        loop {
            let first = self.recv_entry()?;
            let second = self.recv_entry()?;

            let parsed = match (
                Password::from_bytes(&first),
                Password::from_bytes(&second),
            ) {
                (Ok(a), Ok(b)) => Some((a, b)),
                // An entry the keypad could not have produced counts as
                // a mismatch, same as any other bad pair
                _ => None,
            };

            match parsed {
                Some((a, b)) if verify::establish(&a, &b) == Outcome::Matched => {
                    self.send_outcome(Outcome::Matched)?;
                    self.store
                        .write_all(&a.to_record())
                        .map_err(ControlError::Store)?;
                    return Ok(());
                }
                _ => self.send_outcome(Outcome::Mismatched)?,
            }
        }
    }

    /// Serve one menu request end to end
    ///
    /// Blocks for the choice byte, runs the challenge session, and then
    /// either drives the door cycle, re-establishes the credential, or
    /// rides out the lockout interval.
    pub fn serve_request(&mut self) -> Result<Served, ControlError<L::Error>> {
        let choice = self.recv_choice()?;
        self.mode = SessionMode::from(choice);

        match self.run_challenge()? {
            ChallengeResult::Locked => {
                self.run_lockout()?;
                Ok(Served::LockedOut)
            }
            ChallengeResult::Passed => match choice {
                MenuChoice::OpenDoor => {
                    self.run_door_sequence()?;
                    Ok(Served::DoorOpened)
                }
                MenuChoice::ChangePassword => {
                    self.serve_establish()?;
                    Ok(Served::PasswordChanged)
                }
            },
        }
    }

    /// One challenge session against the stored credential
    ///
    /// Answers exactly one outcome byte per received entry. The retry
    /// session is fresh on entry and the third consecutive failure sends
    /// `Locked` instead of a third `Mismatched`.
    fn run_challenge(&mut self) -> Result<ChallengeResult, ControlError<L::Error>> {
        let mut session = RetrySession::new();

        loop {
            let entry = self.recv_entry()?;
            let stored = self.store.read_all().map_err(ControlError::Store)?;

            let outcome = match Password::from_bytes(&entry) {
                Ok(password) => verify::challenge(&password, &stored),
                Err(_) => Outcome::Mismatched,
            };

            if outcome == Outcome::Matched {
                self.send_outcome(Outcome::Matched)?;
                return Ok(ChallengeResult::Passed);
            }

            session = session.apply(outcome);
            if session.is_locked() {
                self.send_outcome(Outcome::Locked)?;
                return Ok(ChallengeResult::Locked);
            }
            self.send_outcome(Outcome::Mismatched)?;
        }
    }

    /// Drive the door through one full open-hold-close cycle
    fn run_door_sequence(&mut self) -> Result<(), ControlError<L::Error>> {
        let plan = self.sequencer.start().map_err(ControlError::Sequence)?;
        self.door.set(self.sequencer.door_command());
        self.ticks.start(plan.period_ms);

        loop {
            self.ticks.wait().map_err(ControlError::Tick)?;

            match self.sequencer.tick() {
                Some(SequenceEvent::PhaseChanged(_)) => {
                    self.door.set(self.sequencer.door_command());
                    if let Some(plan) = self.sequencer.plan() {
                        self.ticks.start(plan.period_ms);
                    }
                }
                Some(SequenceEvent::Complete) => {
                    self.door.set(DoorCommand::stopped());
                    self.ticks.stop();
                    self.sequencer.disarm().map_err(ControlError::Sequence)?;
                    return Ok(());
                }
                None => {}
            }
        }
    }

    /// Hold the alarm for the fixed lockout interval
    ///
    /// Nothing is read from the link while the interval runs; whatever
    /// the user mashes at the keypad stays unconsumed.
    fn run_lockout(&mut self) -> Result<(), ControlError<L::Error>> {
        let plan = self.lockout.start().map_err(ControlError::Sequence)?;
        self.alarm.set(true);
        self.ticks.start(plan.period_ms);

        loop {
            self.ticks.wait().map_err(ControlError::Tick)?;
            if self.lockout.tick() {
                break;
            }
        }

        self.ticks.stop();
        self.alarm.set(false);
        Ok(())
    }

    /// Receive one sentinel-framed entry from the link
    fn recv_entry(&mut self) -> Result<Vec<u8, MAX_PASSWORD_LEN>, ControlError<L::Error>> {
        loop {
            let byte = self.link.read_byte().map_err(ControlError::Link)?;
            if let Some(entry) = self.deframer.feed(byte).map_err(ControlError::Frame)? {
                return Ok(entry);
            }
        }
    }

    /// Receive a menu choice, skipping bytes that are not one
    fn recv_choice(&mut self) -> Result<MenuChoice, ControlError<L::Error>> {
        loop {
            let byte = self.link.read_byte().map_err(ControlError::Link)?;
            if let Some(choice) = MenuChoice::from_byte(byte) {
                return Ok(choice);
            }
        }
    }

    fn send_outcome(&mut self, outcome: Outcome) -> Result<(), ControlError<L::Error>> {
        self.link
            .write_byte(outcome.to_byte())
            .map_err(ControlError::Link)
    }
}
