//! Core types for fade construction.

use crate::time::TimeDuration;
use palette::Srgb;

/// Number of interpolation steps for an absolute color fade.
///
/// A color fade emits `COLOR_FADE_STEPS + 1` frames: frame 0 re-emits the
/// pre-transition color, frame `COLOR_FADE_STEPS` is the exact target.
pub const COLOR_FADE_STEPS: u16 = 100;

/// Number of frames for a brightness or saturation fade.
pub const ADJUST_FADE_STEPS: u16 = 25;

/// What a fade should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeKind {
    /// Fade to an absolute color, linearly in RGB.
    SetColor(Srgb<u8>),

    /// Step brightness by a signed amount, clamping at [0, 255].
    AdjustBrightness(i16),

    /// Step saturation by a signed amount in [-1.0, 1.0], clamping at [0, 1].
    AdjustSaturation(f32),
}

/// One requested transition. Created per command, fully consumed by a single
/// fade.
#[derive(Debug, Clone, Copy)]
pub struct FadeRequest<D: TimeDuration> {
    /// The kind of change to animate.
    pub kind: FadeKind,

    /// Total wall-clock time for the fade. Zero is allowed: every step still
    /// executes, with no delay between frames.
    pub duration: D,
}

impl<D: TimeDuration> FadeRequest<D> {
    /// Creates a request for an absolute color fade.
    #[inline]
    pub fn set_color(target: Srgb<u8>, duration: D) -> Self {
        Self {
            kind: FadeKind::SetColor(target),
            duration,
        }
    }

    /// Creates a request for a relative brightness fade.
    #[inline]
    pub fn adjust_brightness(delta: i16, duration: D) -> Self {
        Self {
            kind: FadeKind::AdjustBrightness(delta),
            duration,
        }
    }

    /// Creates a request for a relative saturation fade.
    ///
    /// Deltas outside [-1.0, 1.0] are clamped when the fade begins.
    #[inline]
    pub fn adjust_saturation(delta: f32, duration: D) -> Self {
        Self {
            kind: FadeKind::AdjustSaturation(delta),
            duration,
        }
    }
}

/// Errors that can occur during fader operations.
///
/// Range problems never show up here: colors, brightness and saturation are
/// clamped, not rejected. `E` is the sink's error type; a sink failure aborts
/// the fade with no local recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaderError<E> {
    /// A fade is already in progress; fades are never preempted or merged.
    FadeInProgress,

    /// No fade in progress to service.
    NotFading,

    /// The hardware sink rejected a frame push.
    Sink(E),
}

impl<E: core::fmt::Display> core::fmt::Display for FaderError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FaderError::FadeInProgress => {
                write!(f, "a fade is already in progress")
            }
            FaderError::NotFading => {
                write!(f, "no fade in progress")
            }
            FaderError::Sink(e) => {
                write!(f, "hardware sink rejected frame: {}", e)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug + core::fmt::Display> std::error::Error for FaderError<E> {}
