//! Core configuration types for the blink loop.

use crate::time::TickDuration;

/// Configuration for a blink controller.
///
/// Bundles the phase period and the polling cadence so callers pass one
/// validated value instead of loose literals. Pin selection stays with the
/// hardware layer that constructs the `Led`/`Button` implementations.
///
/// # Type Parameters
/// * `D` - The duration type (e.g., a fugit- or embassy-backed duration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig<D: TickDuration> {
    period: u32,
    poll_interval: D,
}

impl<D: TickDuration> BlinkConfig<D> {
    /// Creates a validated configuration.
    ///
    /// `period` is the number of iterations in one full blink cycle; the
    /// output spends the first `period / 2` iterations low and the rest
    /// high (before button gating). `poll_interval` is the suspension
    /// between iterations.
    ///
    /// # Errors
    /// * `PeriodTooShort` - `period` is less than 2, leaving no duty window
    pub fn new(period: u32, poll_interval: D) -> Result<Self, ConfigError> {
        if period < 2 {
            return Err(ConfigError::PeriodTooShort);
        }

        Ok(Self {
            period,
            poll_interval,
        })
    }

    /// Returns the number of iterations per blink cycle.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Returns the suspension between iterations.
    pub fn poll_interval(&self) -> D {
        self.poll_interval
    }

    /// Returns the duty-cycle divisor: the phase at which the output
    /// switches from low to high within a cycle.
    pub fn duty_threshold(&self) -> u32 {
        self.period / 2
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Period below 2 iterations.
    PeriodTooShort,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::PeriodTooShort => {
                write!(f, "period must be at least 2 iterations")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
