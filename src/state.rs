//! The authoritative color state of the strip.

use palette::Srgb;

/// Current visual state of the strip: one uniform color plus a global
/// brightness scalar.
///
/// This is pure data with clamping mutators. It never fails: out-of-range
/// requests are clamped into [0, 255], not rejected. During a fade the
/// [`StripFader`](crate::StripFader) is the only writer; between fades the
/// state is stable and safe to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    current_color: Srgb<u8>,
    brightness: u8,
}

impl ColorState {
    /// Creates a state with the given color and brightness.
    pub const fn new(color: Srgb<u8>, brightness: u8) -> Self {
        Self {
            current_color: color,
            brightness,
        }
    }

    /// Returns the current (color, brightness) pair.
    pub fn get(&self) -> (Srgb<u8>, u8) {
        (self.current_color, self.brightness)
    }

    /// Returns the current color.
    pub fn color(&self) -> Srgb<u8> {
        self.current_color
    }

    /// Returns the current brightness level.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Replaces the current color. Always succeeds; the `u8` components are
    /// inherently within range.
    pub fn set_color(&mut self, rgb: Srgb<u8>) {
        self.current_color = rgb;
    }

    /// Replaces the brightness level, clamping into [0, 255].
    pub fn set_brightness(&mut self, level: i16) {
        self.brightness = level.clamp(0, 255) as u8;
    }
}

impl Default for ColorState {
    /// Strip off, full brightness.
    fn default() -> Self {
        Self::new(Srgb::new(0, 0, 0), 255)
    }
}
