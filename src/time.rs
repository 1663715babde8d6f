//! Time abstraction traits for platform-agnostic timing.

/// Trait abstraction for duration types.
pub trait TickDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait for abstracting blocking delay providers.
///
/// Implement this for your platform's timer-backed delay (e.g. a SysTick
/// delay). The blink loop suspends through this trait between iterations;
/// it is the loop's only intentional suspension point.
pub trait Delay<D: TickDuration> {
    /// Blocks for the given duration.
    fn delay(&mut self, duration: D);
}
