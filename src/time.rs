//! Time abstraction traits for platform-agnostic pacing.
//!
//! The fader never sleeps on its own: every emitted frame comes with a delay
//! hint, and the caller decides how to honor it. [`Delay`] is the seam for
//! callers that want blocking run-to-completion behavior.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait for suspending the current execution context for a duration.
///
/// Implement this for your platform's sleep/timer primitive. The fader's
/// run-to-completion entry points call it between frames; a slow
/// implementation stretches the fade in wall time but never drops frames.
pub trait Delay<D: TimeDuration> {
    /// Suspends for at least `duration`.
    fn sleep(&mut self, duration: D);
}

impl TimeDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;

    fn as_millis(&self) -> u64 {
        core::time::Duration::as_millis(self) as u64
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }
}

/// Blocking [`Delay`] backed by `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay<core::time::Duration> for StdDelay {
    fn sleep(&mut self, duration: core::time::Duration) {
        std::thread::sleep(duration);
    }
}
