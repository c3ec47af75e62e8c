#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorState`**: The authoritative (color, brightness) pair for the strip
//! - **`FadeRequest`**: One requested transition — absolute color, brightness step, or saturation step
//! - **`StripFader`**: Computes and drives the fade, one frame per service call
//! - **`StripSink`**: Trait to implement for your LED strip hardware
//! - **`FadeTiming`**: Delay hint telling the caller when to service again
//! - **`FaderControl`**: Command front end with presets and a pending-command queue
//! - **`TimeDuration` / `Delay`**: Traits to implement for your timing system
//!
//! Colors are `palette::Srgb<u8>` (0-255 per channel), matching typical strip
//! drivers. Interpolation happens in `Srgb<f32>` internally; saturation
//! adjustments go through HLS and back on every step.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod config;
pub mod fader;
pub mod state;
pub mod time;
pub mod types;

pub use command::{FaderCommand, FaderControl};
pub use config::FaderConfig;
pub use fader::{FadeTiming, FaderState, StripFader, StripSink};
pub use state::ColorState;
pub use time::{Delay, TimeDuration};
pub use types::{ADJUST_FADE_STEPS, COLOR_FADE_STEPS, FadeKind, FadeRequest, FaderError};

#[cfg(feature = "std")]
pub use time::StdDelay;
