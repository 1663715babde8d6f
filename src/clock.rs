//! Wall-clock access and the one-shot alarm state machine.
//!
//! Provides [`AlarmClock`] which wraps a platform [`WallClock`] and tracks
//! the one-shot alarm through its `Unarmed -> Armed -> Fired` lifecycle.
//! The platform facility advances the clock and raises the alarm
//! notification on its own schedule; this module only snapshots and drains.

use chrono::NaiveDateTime;

/// Trait for abstracting the wall-clock facility.
///
/// Implement this for your RTC hardware or software clock. The
/// implementation owns time advancement; every `now` call must return an
/// atomic snapshot (no torn reads while the clock ticks).
///
/// The alarm side is a one-shot notification: after a successful
/// `schedule_alarm`, the facility raises a pending flag when the clock
/// reaches the target (typically from an interrupt), and `take_alarm`
/// consumes that flag. Implementations without alarm hardware should
/// return [`ClockError::AlarmUnsupported`] from `schedule_alarm`.
pub trait WallClock {
    /// Sets the wall-clock time.
    fn set_datetime(&mut self, t: NaiveDateTime) -> Result<(), ClockError>;

    /// Returns an atomic snapshot of the current wall-clock time.
    fn now(&self) -> Result<NaiveDateTime, ClockError>;

    /// Schedules the one-shot alarm notification for the given target.
    fn schedule_alarm(&mut self, target: NaiveDateTime) -> Result<(), ClockError>;

    /// Consumes the pending alarm notification, if one has been raised.
    ///
    /// Returns `true` at most once per scheduled alarm.
    fn take_alarm(&mut self) -> bool;
}

/// The current state of the one-shot alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// No alarm scheduled.
    Unarmed,
    /// Alarm scheduled, waiting for the clock to reach the target.
    Armed,
    /// Alarm delivered. Terminal: the alarm never re-arms.
    Fired,
}

/// One-shot alarm delivery.
///
/// Carries the wall-clock snapshot taken at drain time; `Err` means the
/// alarm fired but the clock could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmEvent {
    /// Clock snapshot at delivery.
    pub reading: Result<NaiveDateTime, ClockError>,
}

/// Wall-clock access errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// The clock was never successfully initialized.
    NotRunning,
    /// The facility rejected the datetime value.
    InvalidTimestamp,
    /// The clock is in a transiently invalid state.
    Unavailable,
    /// The facility has no alarm support.
    AlarmUnsupported,
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::NotRunning => write!(f, "wall clock is not running"),
            ClockError::InvalidTimestamp => write!(f, "invalid timestamp"),
            ClockError::Unavailable => write!(f, "wall clock temporarily unavailable"),
            ClockError::AlarmUnsupported => write!(f, "alarm not supported by this clock"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

/// Errors that can occur when arming the alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmError {
    /// The wall clock was never initialized; the system is in degraded
    /// no-alarm mode.
    ClockNotRunning,
    /// An alarm is already armed.
    AlreadyArmed,
    /// The alarm already fired; it cannot be re-armed.
    AlreadyFired,
    /// The facility refused the schedule request.
    Schedule(ClockError),
}

impl core::fmt::Display for AlarmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AlarmError::ClockNotRunning => {
                write!(f, "cannot arm alarm: wall clock is not running")
            }
            AlarmError::AlreadyArmed => write!(f, "alarm is already armed"),
            AlarmError::AlreadyFired => write!(f, "alarm already fired and cannot re-arm"),
            AlarmError::Schedule(err) => write!(f, "alarm schedule failed: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AlarmError {}

impl From<ClockError> for AlarmError {
    fn from(err: ClockError) -> Self {
        AlarmError::Schedule(err)
    }
}

/// Wall clock with a one-shot alarm.
///
/// Wraps a [`WallClock`] facility and layers the alarm lifecycle on top.
/// Delivery follows a drain model instead of an interrupt callback:
/// the facility posts its notification, and [`poll`](Self::poll) converts
/// it into an [`AlarmEvent`] on the caller's schedule, exactly once.
///
/// # Type Parameters
/// * `C` - Wall-clock facility implementation type
pub struct AlarmClock<C: WallClock> {
    clock: C,
    running: bool,
    state: AlarmState,
    target: Option<NaiveDateTime>,
}

impl<C: WallClock> AlarmClock<C> {
    /// Creates an unarmed alarm clock over an uninitialized facility.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running: false,
            state: AlarmState::Unarmed,
            target: None,
        }
    }

    /// Initializes the wall clock to the given time.
    ///
    /// On failure the clock stays not-running: reads and arming keep
    /// returning errors, and the blink loop carries on without an alarm.
    pub fn init(&mut self, initial: NaiveDateTime) -> Result<(), ClockError> {
        self.clock.set_datetime(initial)?;
        self.running = true;
        Ok(())
    }

    /// Returns true once the wall clock has been initialized.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arms the one-shot alarm for the given target time.
    ///
    /// Must be called from `Unarmed` state on a running clock. The alarm
    /// fires on the first facility notification at or after the target.
    ///
    /// # Errors
    /// * `ClockNotRunning` - `init` never succeeded
    /// * `AlreadyArmed` / `AlreadyFired` - alarm is single-use
    /// * `Schedule` - the facility refused (e.g. no alarm hardware)
    pub fn arm(&mut self, target: NaiveDateTime) -> Result<(), AlarmError> {
        if !self.running {
            return Err(AlarmError::ClockNotRunning);
        }

        match self.state {
            AlarmState::Unarmed => {}
            AlarmState::Armed => return Err(AlarmError::AlreadyArmed),
            AlarmState::Fired => return Err(AlarmError::AlreadyFired),
        }

        self.clock.schedule_alarm(target)?;
        self.target = Some(target);
        self.state = AlarmState::Armed;
        Ok(())
    }

    /// Drains the alarm notification, if the facility has raised it.
    ///
    /// Transitions `Armed -> Fired` and returns the delivery exactly once;
    /// every other call returns `None`. Callers may poll at any cadence -
    /// the facility's notification is latched until drained.
    pub fn poll(&mut self) -> Option<AlarmEvent> {
        if self.state != AlarmState::Armed {
            return None;
        }

        if !self.clock.take_alarm() {
            return None;
        }

        self.state = AlarmState::Fired;
        Some(AlarmEvent {
            reading: self.clock.now(),
        })
    }

    /// Returns an atomic snapshot of the wall-clock time.
    ///
    /// The `Err` case is the diagnostic "success flag false" of the
    /// underlying facility: callers report it and continue.
    pub fn read(&self) -> Result<NaiveDateTime, ClockError> {
        if !self.running {
            return Err(ClockError::NotRunning);
        }
        self.clock.now()
    }

    /// Returns the current alarm state.
    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Returns the armed target, if any.
    pub fn target(&self) -> Option<NaiveDateTime> {
        self.target
    }
}
