//! Hardware timer wrappers for the blink-controller time traits.
//!
//! Durations ride on fugit's millisecond type; the blocking delay wraps
//! the cortex-m SysTick delay.

use blink_controller::{Delay, TickDuration};
use fugit::MillisDurationU64;

/// Duration type backed by fugit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(MillisDurationU64);

impl TickDuration for Millis {
    const ZERO: Self = Millis(MillisDurationU64::from_ticks(0));

    fn as_millis(&self) -> u64 {
        self.0.to_millis()
    }

    fn from_millis(millis: u64) -> Self {
        Millis(MillisDurationU64::millis(millis))
    }
}

/// Blocking delay backed by the SysTick timer.
pub struct SysTickDelay {
    delay: cortex_m::delay::Delay,
}

impl SysTickDelay {
    pub fn new(delay: cortex_m::delay::Delay) -> Self {
        Self { delay }
    }
}

impl Delay<Millis> for SysTickDelay {
    fn delay(&mut self, duration: Millis) {
        self.delay.delay_ms(duration.as_millis() as u32);
    }
}
