//! Blink controller with phase tracking and button-gated output.
//!
//! Provides [`BlinkController`] which drives a single LED as a square wave
//! gated by a live button input, tracking the phase and cycle counters and
//! reporting when a cycle wraps.

use crate::io::{Button, Led};
use crate::time::TickDuration;
use crate::types::BlinkConfig;

/// Timing information returned by service operations.
///
/// Tells the caller how long to suspend before the next iteration and
/// whether the phase counter wrapped on this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceOutcome<D> {
    /// Phase advanced within the current cycle. Suspend for the delay,
    /// then service again.
    Tick {
        /// Poll interval from the configuration.
        delay: D,
    },

    /// Phase wrapped back to zero, completing a cycle.
    ///
    /// `cycle` is the number of cycles completed so far (1 on the first
    /// wrap). Suspend for the delay, then service again.
    CycleComplete {
        /// Completed cycle count.
        cycle: u64,
        /// Poll interval from the configuration.
        delay: D,
    },
}

impl<D: TickDuration> ServiceOutcome<D> {
    /// Returns the suspension to apply before the next service call.
    pub fn delay(&self) -> D {
        match self {
            ServiceOutcome::Tick { delay } => *delay,
            ServiceOutcome::CycleComplete { delay, .. } => *delay,
        }
    }
}

/// Drives a single LED as a button-gated square wave.
///
/// Each controller owns its LED and button and advances one iteration per
/// [`service`](Self::service) call. The output level is recomputed from the
/// phase counter and the live button sample on every iteration - it is
/// never cached across iterations, so a button change shows on the very
/// next service call.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `B` - Button implementation type
/// * `D` - Duration type for the poll interval
pub struct BlinkController<L: Led, B: Button, D: TickDuration> {
    led: L,
    button: B,
    config: BlinkConfig<D>,
    phase: u32,
    cycles: u64,
    output: bool,
}

impl<L: Led, B: Button, D: TickDuration> BlinkController<L, B, D> {
    /// Creates a new controller with the LED driven low.
    pub fn new(mut led: L, button: B, config: BlinkConfig<D>) -> Self {
        led.set_state(false);

        Self {
            led,
            button,
            config,
            phase: 0,
            cycles: 0,
            output: false,
        }
    }

    /// Runs one iteration of the blink loop.
    ///
    /// Steps, in order: sample the button, compute the output level, write
    /// it to the LED, advance the phase counter. When the phase reaches the
    /// configured period it wraps to zero and the completed cycle is
    /// reported.
    ///
    /// The output level is `(phase >= period / 2) XOR pressed`: a square
    /// wave whose polarity the button inverts in real time.
    pub fn service(&mut self) -> ServiceOutcome<D> {
        let pressed = self.button.is_pressed();
        let on = (self.phase >= self.config.duty_threshold()) ^ pressed;

        self.led.set_state(on);
        self.output = on;

        self.phase += 1;
        let delay = self.config.poll_interval();

        if self.phase == self.config.period() {
            self.phase = 0;
            self.cycles += 1;
            ServiceOutcome::CycleComplete {
                cycle: self.cycles,
                delay,
            }
        } else {
            ServiceOutcome::Tick { delay }
        }
    }

    /// Returns the current phase counter, always in `[0, period)`.
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Returns the number of completed cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the output level written on the most recent iteration.
    pub fn output(&self) -> bool {
        self.output
    }

    /// Returns the active configuration.
    pub fn config(&self) -> BlinkConfig<D> {
        self.config
    }
}
