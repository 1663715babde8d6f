//! RTT-backed diagnostic sink.

use blink_controller::{DiagnosticEvent, DiagnosticSink};
use rtt_target::rprintln;

/// Renders each event as one RTT console line.
pub struct RttSink;

impl DiagnosticSink for RttSink {
    fn record(&mut self, event: DiagnosticEvent) {
        rprintln!("{}", event);
    }
}
