//! Color constants and HLS helpers.
//!
//! The preset palette covers the discrete colors a remote control typically
//! offers. Saturation manipulation goes through `palette`'s HSL type and back
//! to `Srgb<u8>`; it is re-derived from RGB on every call rather than cached,
//! so repeated nudges track the strip's actual quantized state.

use palette::{FromColor, Hsl, RgbHue, Srgb};

pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const ORANGE: Srgb<u8> = Srgb::new(255, 127, 0);
pub const YELLOW: Srgb<u8> = Srgb::new(255, 255, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const PURPLE: Srgb<u8> = Srgb::new(127, 0, 255);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);

/// Returns the HLS saturation of a color, in [0.0, 1.0].
pub fn saturation_of(color: Srgb<u8>) -> f32 {
    Hsl::from_color(color.into_format::<f32>()).saturation
}

/// Returns `color` with its HLS saturation offset by `offset`, clamped to
/// [0.0, 1.0]. Hue and lightness are preserved.
///
/// Achromatic input (white/black/gray) has no defined hue; it is pinned to 0
/// degrees so that raising saturation from gray produces the same color on
/// every run.
pub fn with_saturation_offset(color: Srgb<u8>, offset: f32) -> Srgb<u8> {
    let hsl = Hsl::from_color(color.into_format::<f32>());

    let hue = if hsl.saturation == 0.0 {
        RgbHue::from_degrees(0.0)
    } else {
        hsl.hue
    };
    let saturation = (hsl.saturation + offset).clamp(0.0, 1.0);

    Srgb::from_color(Hsl::new(hue, saturation, hsl.lightness)).into_format()
}
