//! Shared test infrastructure for blink-controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use blink_controller::{Button, ClockError, Led, TickDuration, WallClock};
use chrono::{NaiveDate, NaiveDateTime};
use core::cell::{Cell, RefCell};

// ============================================================================
// Mock Duration
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TickDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every written level for testing.
///
/// The controller owns its LED, so tests hand it a `&MockLed` and keep the
/// original around for inspection.
pub struct MockLed {
    history: RefCell<heapless::Vec<bool, 512>>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            history: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn last(&self) -> Option<bool> {
        self.history.borrow().last().copied()
    }

    pub fn writes(&self) -> usize {
        self.history.borrow().len()
    }

    /// Written levels in order, skipping the low write from construction.
    pub fn levels_after_construction(&self) -> heapless::Vec<bool, 512> {
        self.history.borrow().iter().skip(1).copied().collect()
    }
}

impl Led for &MockLed {
    fn set_state(&mut self, on: bool) {
        let _ = self.history.borrow_mut().push(on);
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Mock button with an externally controllable level
pub struct MockButton {
    pressed: Cell<bool>,
}

impl MockButton {
    pub fn new() -> Self {
        Self {
            pressed: Cell::new(false),
        }
    }

    pub fn set_pressed(&self, pressed: bool) {
        self.pressed.set(pressed);
    }
}

impl Button for &MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed.get()
    }
}

// ============================================================================
// Mock Wall-Clock Facility
// ============================================================================

/// Mock wall-clock facility with controllable time advancement.
///
/// Advancing across the scheduled alarm target latches the pending flag,
/// imitating an RTC raising its interrupt while the main loop is suspended.
pub struct MockClock {
    now: Cell<Option<NaiveDateTime>>,
    target: Cell<Option<NaiveDateTime>>,
    pending: Cell<bool>,
    fail_set: Cell<bool>,
    fail_reads: Cell<bool>,
    alarm_supported: bool,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(None),
            target: Cell::new(None),
            pending: Cell::new(false),
            fail_set: Cell::new(false),
            fail_reads: Cell::new(false),
            alarm_supported: true,
        }
    }

    pub fn without_alarm() -> Self {
        Self {
            alarm_supported: false,
            ..Self::new()
        }
    }

    pub fn fail_set(&self, fail: bool) {
        self.fail_set.set(fail);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn current(&self) -> Option<NaiveDateTime> {
        self.now.get()
    }

    /// Advance the clock by whole seconds, latching the alarm flag when
    /// the target is reached or crossed.
    pub fn advance_secs(&self, secs: i64) {
        let now = self.now.get().expect("clock not set");
        let next = now
            .checked_add_signed(chrono::Duration::seconds(secs))
            .unwrap();
        self.now.set(Some(next));

        if let Some(target) = self.target.get() {
            if next >= target {
                self.pending.set(true);
            }
        }
    }
}

impl WallClock for &MockClock {
    fn set_datetime(&mut self, t: NaiveDateTime) -> Result<(), ClockError> {
        if self.fail_set.get() {
            return Err(ClockError::InvalidTimestamp);
        }
        self.now.set(Some(t));
        Ok(())
    }

    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        if self.fail_reads.get() {
            return Err(ClockError::Unavailable);
        }
        self.now.get().ok_or(ClockError::NotRunning)
    }

    fn schedule_alarm(&mut self, target: NaiveDateTime) -> Result<(), ClockError> {
        if !self.alarm_supported {
            return Err(ClockError::AlarmUnsupported);
        }
        self.target.set(Some(target));
        Ok(())
    }

    fn take_alarm(&mut self) -> bool {
        self.pending.replace(false)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Demo boot time: 2024-04-18 (a Thursday) 11:30:24.
pub fn boot_time() -> NaiveDateTime {
    datetime(2024, 4, 18, 11, 30, 24)
}

/// Demo alarm target: eleven seconds after `boot_time`.
pub fn alarm_target() -> NaiveDateTime {
    datetime(2024, 4, 18, 11, 30, 35)
}

pub fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
