//! Runtime configuration for a strip and its control front end.

use crate::time::TimeDuration;

/// Default pixel count.
pub const DEFAULT_STRIP_LENGTH: u16 = 150;

/// Default total fade time in milliseconds.
pub const DEFAULT_FADE_MILLIS: u64 = 1000;

/// Default brightness nudge, one fifth of full scale.
pub const DEFAULT_BRIGHTNESS_STEP: i16 = 51;

/// Default saturation nudge.
pub const DEFAULT_SATURATION_STEP: f32 = 0.2;

/// Recognized configuration options.
///
/// `strip_length` is carried for the hardware binding that implements
/// [`StripSink`](crate::StripSink); the fader itself treats the strip as a
/// single uniform color and is pixel-count agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaderConfig<D: TimeDuration> {
    /// Number of pixels on the strip.
    pub strip_length: u16,

    /// Total wall-clock time of one fade.
    pub fade_duration: D,

    /// Brightness change applied by the preset nudge commands.
    pub brightness_step: i16,

    /// Saturation change applied by the preset nudge commands.
    pub saturation_step: f32,
}

impl<D: TimeDuration> FaderConfig<D> {
    /// Sets the strip length.
    pub fn with_strip_length(mut self, length: u16) -> Self {
        self.strip_length = length;
        self
    }

    /// Sets the total fade duration.
    pub fn with_fade_duration(mut self, duration: D) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Sets the preset brightness step.
    pub fn with_brightness_step(mut self, step: i16) -> Self {
        self.brightness_step = step;
        self
    }

    /// Sets the preset saturation step.
    pub fn with_saturation_step(mut self, step: f32) -> Self {
        self.saturation_step = step;
        self
    }
}

impl<D: TimeDuration> Default for FaderConfig<D> {
    fn default() -> Self {
        Self {
            strip_length: DEFAULT_STRIP_LENGTH,
            fade_duration: D::from_millis(DEFAULT_FADE_MILLIS),
            brightness_step: DEFAULT_BRIGHTNESS_STEP,
            saturation_step: DEFAULT_SATURATION_STEP,
        }
    }
}
