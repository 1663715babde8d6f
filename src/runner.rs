//! Loop composition: wiring the controller, clock and sink together.
//!
//! Two runners mirror the two firmware variants: [`BlinkRunner`] drives the
//! bare blink loop, [`AlarmBlinkRunner`] adds the wall clock with its
//! one-shot alarm. Both expose a testable [`step`](BlinkRunner::step) and a
//! `run_forever` entry that never returns.

use crate::clock::{AlarmClock, WallClock};
use crate::controller::{BlinkController, ServiceOutcome};
use crate::diag::{DiagnosticEvent, DiagnosticSink};
use crate::io::{Button, Led};
use crate::time::{Delay, TickDuration};

/// Runs the plain blink loop and reports cycle completions.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `B` - Button implementation type
/// * `D` - Duration type for the poll interval
/// * `S` - Diagnostic sink type
pub struct BlinkRunner<L: Led, B: Button, D: TickDuration, S: DiagnosticSink> {
    controller: BlinkController<L, B, D>,
    sink: S,
    started: bool,
}

impl<L: Led, B: Button, D: TickDuration, S: DiagnosticSink> BlinkRunner<L, B, D, S> {
    /// Creates a runner over a controller and a sink.
    pub fn new(controller: BlinkController<L, B, D>, sink: S) -> Self {
        Self {
            controller,
            sink,
            started: false,
        }
    }

    /// Runs one loop iteration and returns the suspension to apply.
    ///
    /// The first call reports [`DiagnosticEvent::Started`]; every cycle
    /// wrap reports [`DiagnosticEvent::CycleComplete`].
    pub fn step(&mut self) -> D {
        if !self.started {
            self.sink.record(DiagnosticEvent::Started);
            self.started = true;
        }

        match self.controller.service() {
            ServiceOutcome::Tick { delay } => delay,
            ServiceOutcome::CycleComplete { cycle, delay } => {
                self.sink.record(DiagnosticEvent::CycleComplete { cycle });
                delay
            }
        }
    }

    /// Drives the loop until power-off. There is no shutdown path.
    pub fn run_forever(&mut self, delay: &mut impl Delay<D>) -> ! {
        loop {
            let suspend = self.step();
            delay.delay(suspend);
        }
    }

    /// Returns the underlying controller.
    pub fn controller(&self) -> &BlinkController<L, B, D> {
        &self.controller
    }

    /// Returns the diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Runs the blink loop extended with a wall clock and one-shot alarm.
///
/// Per iteration it first drains the alarm notification (the facility may
/// have raised it at any point since the previous iteration, including
/// mid-suspension), then services the controller. Every cycle wrap
/// additionally snapshots the wall clock and reports the reading - or its
/// failure flag, which never stops the loop.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `B` - Button implementation type
/// * `D` - Duration type for the poll interval
/// * `C` - Wall-clock facility implementation type
/// * `S` - Diagnostic sink type
pub struct AlarmBlinkRunner<L, B, D, C, S>
where
    L: Led,
    B: Button,
    D: TickDuration,
    C: WallClock,
    S: DiagnosticSink,
{
    controller: BlinkController<L, B, D>,
    alarm: AlarmClock<C>,
    sink: S,
    started: bool,
}

impl<L, B, D, C, S> AlarmBlinkRunner<L, B, D, C, S>
where
    L: Led,
    B: Button,
    D: TickDuration,
    C: WallClock,
    S: DiagnosticSink,
{
    /// Creates a runner over a controller, an alarm clock and a sink.
    ///
    /// The alarm clock is taken as-is: initialize and arm it first, and
    /// surface any arming failure at startup. A clock that failed `init`
    /// degrades to per-wrap read-failure reports; the blinking is
    /// unaffected.
    pub fn new(controller: BlinkController<L, B, D>, alarm: AlarmClock<C>, sink: S) -> Self {
        Self {
            controller,
            alarm,
            sink,
            started: false,
        }
    }

    /// Runs one loop iteration and returns the suspension to apply.
    pub fn step(&mut self) -> D {
        if !self.started {
            self.sink.record(DiagnosticEvent::Started);
            self.started = true;
        }

        if let Some(event) = self.alarm.poll() {
            self.sink.record(DiagnosticEvent::AlarmFired {
                reading: event.reading,
            });
        }

        match self.controller.service() {
            ServiceOutcome::Tick { delay } => delay,
            ServiceOutcome::CycleComplete { cycle, delay } => {
                self.sink.record(DiagnosticEvent::CycleComplete { cycle });
                self.sink.record(DiagnosticEvent::ClockReading {
                    reading: self.alarm.read(),
                });
                delay
            }
        }
    }

    /// Drives the loop until power-off. There is no shutdown path.
    pub fn run_forever(&mut self, delay: &mut impl Delay<D>) -> ! {
        loop {
            let suspend = self.step();
            delay.delay(suspend);
        }
    }

    /// Returns the underlying controller.
    pub fn controller(&self) -> &BlinkController<L, B, D> {
        &self.controller
    }

    /// Returns the alarm clock.
    pub fn alarm(&self) -> &AlarmClock<C> {
        &self.alarm
    }

    /// Returns the diagnostic sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
