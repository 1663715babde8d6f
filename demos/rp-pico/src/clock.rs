//! Software wall clock backed by the RP2040 hardware timer.
//!
//! The calendar time is kept as a base value plus the hardware timer's
//! elapsed microseconds, so reads are atomic snapshots without touching
//! the RTC peripheral. The alarm notification latches on the first read
//! at or past the target; granularity is therefore the caller's poll
//! cadence, which for the demo loop is the 100 ms poll interval.

use blink_controller::{ClockError, WallClock};
use chrono::NaiveDateTime;
use fugit::TimerInstantU64;

type Instant = TimerInstantU64<1_000_000>;

/// Software RTC: wall-clock base plus hardware timer offset.
pub struct SoftRtc {
    timer: rp_pico::hal::Timer,
    base: Option<(NaiveDateTime, Instant)>,
    target: Option<NaiveDateTime>,
}

impl SoftRtc {
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self {
            timer,
            base: None,
            target: None,
        }
    }

    fn elapsed_secs(&self, since: Instant) -> i64 {
        let ticks = self.timer.get_counter().ticks().saturating_sub(since.ticks());
        (ticks / 1_000_000) as i64
    }
}

impl WallClock for SoftRtc {
    fn set_datetime(&mut self, t: NaiveDateTime) -> Result<(), ClockError> {
        self.base = Some((t, self.timer.get_counter()));
        Ok(())
    }

    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        let (base, started) = self.base.ok_or(ClockError::NotRunning)?;
        base.checked_add_signed(chrono::Duration::seconds(self.elapsed_secs(started)))
            .ok_or(ClockError::Unavailable)
    }

    fn schedule_alarm(&mut self, target: NaiveDateTime) -> Result<(), ClockError> {
        if self.base.is_none() {
            return Err(ClockError::NotRunning);
        }
        self.target = Some(target);
        Ok(())
    }

    fn take_alarm(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        match self.now() {
            Ok(now) if now >= target => {
                // One-shot: drop the target so the notification cannot repeat.
                self.target = None;
                true
            }
            _ => false,
        }
    }
}
