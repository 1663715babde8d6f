//! Diagnostic reporting for the blink loop.
//!
//! The loop never formats text itself: it emits typed [`DiagnosticEvent`]s
//! through the [`DiagnosticSink`] trait and lets the sink decide what to do
//! with them - render over RTT, count them, or keep a bounded history like
//! [`EventLog`]. Delivery is fire-and-forget; sinks must not fail.

use crate::clock::ClockError;
use chrono::{Datelike, NaiveDateTime, Timelike};
use heapless::Deque;

/// A diagnostic report from the blink loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Loop entered, before the first iteration.
    Started,

    /// A full blink cycle completed. `cycle` counts completed cycles,
    /// starting at 1.
    CycleComplete {
        /// Completed cycle count.
        cycle: u64,
    },

    /// Wall-clock snapshot taken at a cycle wrap. `Err` carries the
    /// facility's failure flag; the loop continues either way.
    ClockReading {
        /// Snapshot or read failure.
        reading: Result<NaiveDateTime, ClockError>,
    },

    /// The one-shot alarm fired.
    AlarmFired {
        /// Clock snapshot taken at delivery, if readable.
        reading: Result<NaiveDateTime, ClockError>,
    },
}

fn write_datetime(f: &mut core::fmt::Formatter<'_>, t: &NaiveDateTime) -> core::fmt::Result {
    write!(
        f,
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        t.year(),
        t.month(),
        t.day(),
        t.hour(),
        t.minute(),
        t.second()
    )
}

impl core::fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DiagnosticEvent::Started => write!(f, "blink loop started"),
            DiagnosticEvent::CycleComplete { cycle } => {
                write!(f, "cycle {} complete", cycle)
            }
            DiagnosticEvent::ClockReading { reading } => match reading {
                Ok(t) => {
                    write!(f, "clock ")?;
                    write_datetime(f, t)
                }
                Err(err) => write!(f, "clock read failed: {}", err),
            },
            DiagnosticEvent::AlarmFired { reading } => match reading {
                Ok(t) => {
                    write!(f, "alarm fired at ")?;
                    write_datetime(f, t)
                }
                Err(err) => write!(f, "alarm fired, clock read failed: {}", err),
            },
        }
    }
}

/// Trait for abstracting the diagnostic output.
///
/// Implement this for your console (RTT, UART, semihosting). Recording is
/// fire-and-forget: no delivery guarantee is required and the method
/// cannot fail.
pub trait DiagnosticSink {
    /// Records one event.
    fn record(&mut self, event: DiagnosticEvent);
}

/// Sink that discards every event.
///
/// For builds without a console attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _event: DiagnosticEvent) {}
}

/// Bounded in-memory sink keeping the most recent events.
///
/// Useful on targets without a console and as the observation point in
/// host tests. When full, the oldest event is dropped to make room.
///
/// # Type Parameters
/// * `N` - Maximum number of retained events
#[derive(Debug, Default)]
pub struct EventLog<const N: usize> {
    events: Deque<DiagnosticEvent, N>,
}

impl<const N: usize> EventLog<N> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Returns the number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events have been retained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the most recent event, if any.
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.back()
    }

    /// Iterates retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Drops all retained events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<const N: usize> DiagnosticSink for EventLog<N> {
    fn record(&mut self, event: DiagnosticEvent) {
        if self.events.is_full() {
            self.events.pop_front();
        }
        // Cannot fail: a slot was just freed if necessary.
        let _ = self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    extern crate std;
    use std::format;
    use std::vec::Vec;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 18)
            .unwrap()
            .and_hms_opt(11, 30, 35)
            .unwrap()
    }

    #[test]
    fn event_log_retains_in_order() {
        let mut log = EventLog::<8>::new();
        assert!(log.is_empty());

        log.record(DiagnosticEvent::Started);
        log.record(DiagnosticEvent::CycleComplete { cycle: 1 });
        log.record(DiagnosticEvent::CycleComplete { cycle: 2 });

        assert_eq!(log.len(), 3);
        assert_eq!(log.last(), Some(&DiagnosticEvent::CycleComplete { cycle: 2 }));

        let events: Vec<_> = log.iter().copied().collect();
        assert_eq!(events[0], DiagnosticEvent::Started);
        assert_eq!(events[1], DiagnosticEvent::CycleComplete { cycle: 1 });
    }

    #[test]
    fn event_log_drops_oldest_when_full() {
        let mut log = EventLog::<2>::new();

        log.record(DiagnosticEvent::CycleComplete { cycle: 1 });
        log.record(DiagnosticEvent::CycleComplete { cycle: 2 });
        log.record(DiagnosticEvent::CycleComplete { cycle: 3 });

        assert_eq!(log.len(), 2);
        let events: Vec<_> = log.iter().copied().collect();
        assert_eq!(events[0], DiagnosticEvent::CycleComplete { cycle: 2 });
        assert_eq!(events[1], DiagnosticEvent::CycleComplete { cycle: 3 });
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = EventLog::<4>::new();
        log.record(DiagnosticEvent::Started);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }

    #[test]
    fn events_render_like_console_lines() {
        assert_eq!(format!("{}", DiagnosticEvent::Started), "blink loop started");
        assert_eq!(
            format!("{}", DiagnosticEvent::CycleComplete { cycle: 7 }),
            "cycle 7 complete"
        );
        assert_eq!(
            format!(
                "{}",
                DiagnosticEvent::ClockReading {
                    reading: Ok(sample_time())
                }
            ),
            "clock 2024-04-18 11:30:35"
        );
        assert_eq!(
            format!(
                "{}",
                DiagnosticEvent::AlarmFired {
                    reading: Ok(sample_time())
                }
            ),
            "alarm fired at 2024-04-18 11:30:35"
        );
    }

    #[test]
    fn failed_readings_render_the_failure_flag() {
        let rendered = format!(
            "{}",
            DiagnosticEvent::ClockReading {
                reading: Err(ClockError::Unavailable)
            }
        );
        assert!(rendered.contains("clock read failed"));

        let rendered = format!(
            "{}",
            DiagnosticEvent::AlarmFired {
                reading: Err(ClockError::Unavailable)
            }
        );
        assert!(rendered.contains("alarm fired"));
        assert!(rendered.contains("read failed"));
    }

    #[test]
    fn null_sink_discards_everything() {
        let mut sink = NullSink;
        sink.record(DiagnosticEvent::Started);
        sink.record(DiagnosticEvent::CycleComplete { cycle: 1 });
    }
}
