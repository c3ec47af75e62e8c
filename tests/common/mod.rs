//! Shared test infrastructure for strip-fader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use palette::Srgb;
use strip_fader::{Delay, StripSink, TimeDuration};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

// ============================================================================
// Mock Sink
// ============================================================================

/// One (color, brightness) snapshot captured at `show()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub color: Srgb<u8>,
    pub brightness: u8,
}

/// Mock sink that records every pushed frame for testing
pub struct MockSink {
    staged: Srgb<u8>,
    brightness: u8,
    frames: heapless::Vec<Frame, 512>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            staged: Srgb::new(0, 0, 0),
            brightness: 255,
            frames: heapless::Vec::new(),
        }
    }

    /// All frames pushed so far, in push order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Frame {
        *self.frames.last().expect("no frames pushed")
    }
}

impl StripSink for MockSink {
    type Error = Infallible;

    fn set_all_pixels(&mut self, color: Srgb<u8>) -> Result<(), Self::Error> {
        self.staged = color;
        Ok(())
    }

    fn set_global_brightness(&mut self, level: u8) -> Result<(), Self::Error> {
        self.brightness = level;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.frames
            .push(Frame {
                color: self.staged,
                brightness: self.brightness,
            })
            .expect("frame capture capacity exceeded");
        Ok(())
    }
}

// ============================================================================
// Failing Sink
// ============================================================================

/// Error type for a sink that has gone away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkDown;

impl core::fmt::Display for SinkDown {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "sink unreachable")
    }
}

/// Sink that accepts a fixed number of `show()` calls, then fails
pub struct FailingSink {
    shows_left: usize,
}

impl FailingSink {
    pub fn after(shows: usize) -> Self {
        Self { shows_left: shows }
    }
}

impl StripSink for FailingSink {
    type Error = SinkDown;

    fn set_all_pixels(&mut self, _color: Srgb<u8>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_global_brightness(&mut self, _level: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        if self.shows_left == 0 {
            return Err(SinkDown);
        }
        self.shows_left -= 1;
        Ok(())
    }
}

// ============================================================================
// Pacers
// ============================================================================

/// Pacer that returns immediately
pub struct NoopDelay;

impl Delay<TestDuration> for NoopDelay {
    fn sleep(&mut self, _duration: TestDuration) {}
}

/// Pacer that records every requested sleep
pub struct RecordingDelay {
    pub sleeps: heapless::Vec<TestDuration, 512>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self {
            sleeps: heapless::Vec::new(),
        }
    }
}

impl Delay<TestDuration> for RecordingDelay {
    fn sleep(&mut self, duration: TestDuration) {
        self.sleeps.push(duration).expect("sleep capture capacity exceeded");
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with tolerance
pub fn approx(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}
