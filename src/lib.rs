#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`BlinkConfig`**: Validated loop configuration (phase period and poll interval)
//! - **`BlinkController`**: Drives a single LED as a button-gated square wave
//! - **`ServiceOutcome`**: Per-iteration timing hint and cycle-wrap report
//! - **`AlarmClock`**: Wall clock with a one-shot `Unarmed -> Armed -> Fired` alarm
//! - **`BlinkRunner` / `AlarmBlinkRunner`**: Loop composition for the two firmware variants
//! - **`Led` / `Button`**: Traits to implement for your pin hardware
//! - **`WallClock`**: Trait to implement for your RTC or software clock
//! - **`TickDuration` / `Delay`**: Traits to implement for your timing system
//! - **`DiagnosticSink`**: Trait to implement for your console output
//!
//! Wall-clock values are `chrono::NaiveDateTime`; derive the day of week
//! with `chrono::Datelike::weekday()` when your RTC hardware wants it.

// Re-export the wall-clock value type from chrono for user convenience
pub use chrono::NaiveDateTime;

pub mod time;
pub mod types;
pub mod io;
pub mod controller;
pub mod clock;
pub mod diag;
pub mod runner;

pub use clock::{AlarmClock, AlarmError, AlarmEvent, AlarmState, ClockError, WallClock};
pub use controller::{BlinkController, ServiceOutcome};
pub use diag::{DiagnosticEvent, DiagnosticSink, EventLog, NullSink};
pub use io::{Button, Led};
pub use runner::{AlarmBlinkRunner, BlinkRunner};
pub use time::{Delay, TickDuration};
pub use types::{BlinkConfig, ConfigError};
