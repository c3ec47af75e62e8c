//! Strip fader with state management and frame pacing.
//!
//! Provides [`StripFader`] which animates a single uniform-color LED strip
//! from its current [`ColorState`] to a requested target, pushing every
//! intermediate frame to the hardware sink. Also defines the [`StripSink`]
//! trait for hardware abstraction.

use crate::colors::with_saturation_offset;
use crate::state::ColorState;
use crate::time::{Delay, TimeDuration};
use crate::types::{ADJUST_FADE_STEPS, COLOR_FADE_STEPS, FadeKind, FadeRequest, FaderError};
use palette::{Mix, Srgb};

/// Trait for abstracting LED strip hardware.
///
/// Implement this for your LED driver (WS281x, SPI, PWM, a test mock) to let
/// the fader render frames. The fader calls `set_all_pixels` followed by
/// `show` for every frame, and `set_global_brightness` whenever the
/// brightness level changes. A returned error is treated as fatal: the active
/// fade is aborted and the error propagates to the caller unchanged.
pub trait StripSink {
    /// Hardware error type.
    type Error;

    /// Stages the given color on every pixel of the strip.
    fn set_all_pixels(&mut self, color: Srgb<u8>) -> Result<(), Self::Error>;

    /// Sets the global intensity scalar the hardware applies to pushed colors.
    fn set_global_brightness(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Pushes the currently staged frame to the physical strip.
    fn show(&mut self) -> Result<(), Self::Error>;
}

/// The current state of a strip fader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaderState {
    /// No fade in progress. The color state is stable and safe to read.
    Idle,
    /// A fade is actively stepping toward its target.
    Fading,
}

/// Timing information returned after each emitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeTiming<D> {
    /// A frame was emitted. Wait this long, then call
    /// [`service`](StripFader::service) again.
    ///
    /// The delay is `duration / step_count` and applies after every frame,
    /// including the last one.
    Delay(D),

    /// The fade has completed; the color state holds the final value.
    Complete,
}

/// What the active fade is stepping through. Captured once when the fade
/// begins so that mid-fade state reads cannot skew the interpolation.
#[derive(Debug, Clone, Copy)]
enum FadePlan {
    /// Linear RGB interpolation from `from` to `to`.
    Color { from: Srgb<u8>, to: Srgb<u8> },
    /// Brightness ramp from `from` toward `from + delta`, clamped.
    Brightness { from: u8, delta: i16 },
    /// Per-frame saturation offset, re-derived from RGB each step.
    Saturation { step_offset: f32 },
}

#[derive(Debug, Clone, Copy)]
struct ActiveFade<D> {
    plan: FadePlan,
    /// Next frame index to emit.
    next_frame: u16,
    /// Last frame index of the fade (inclusive).
    last_frame: u16,
    step_delay: D,
}

/// Animates a uniform-color LED strip through timed fades.
///
/// The fader owns the hardware sink and the strip's [`ColorState`], and
/// processes at most one fade at a time to completion — fades are never
/// preempted or merged. Stepping is caller-driven: [`begin`](Self::begin)
/// emits the first frame, each [`service`](Self::service) call emits exactly
/// the next one, and the returned [`FadeTiming`] says how long to wait before
/// the next call. Frames are emitted strictly in increasing step order; a
/// slow caller stretches the fade in wall time rather than dropping frames.
///
/// # Type Parameters
/// * `D` - Duration type
/// * `S` - Strip sink implementation type
pub struct StripFader<D: TimeDuration, S: StripSink> {
    sink: S,
    state: ColorState,
    active: Option<ActiveFade<D>>,
}

impl<D: TimeDuration, S: StripSink> StripFader<D, S> {
    /// Creates an idle fader with default state (strip off, full brightness).
    pub fn new(sink: S) -> Self {
        Self::with_state(sink, ColorState::default())
    }

    /// Creates an idle fader starting from the given state.
    pub fn with_state(sink: S, state: ColorState) -> Self {
        Self {
            sink,
            state,
            active: None,
        }
    }

    /// Begins a fade toward the requested target and emits its first frame.
    ///
    /// For a color fade the first frame equals the pre-transition color,
    /// confirming the sink's current state before interpolation starts.
    /// Saturation deltas outside [-1.0, 1.0] are clamped here.
    ///
    /// # Returns
    /// * `Ok(FadeTiming::Delay(d))` - First frame emitted, service again after `d`
    /// * `Err(FaderError::FadeInProgress)` - Another fade is mid-flight
    /// * `Err(FaderError::Sink(e))` - The sink rejected the frame; fade aborted
    pub fn begin(&mut self, request: FadeRequest<D>) -> Result<FadeTiming<D>, FaderError<S::Error>> {
        if self.active.is_some() {
            return Err(FaderError::FadeInProgress);
        }

        let (plan, first_frame, last_frame) = match request.kind {
            FadeKind::SetColor(target) => (
                FadePlan::Color {
                    from: self.state.color(),
                    to: target,
                },
                0,
                COLOR_FADE_STEPS,
            ),
            FadeKind::AdjustBrightness(delta) => (
                FadePlan::Brightness {
                    from: self.state.brightness(),
                    delta,
                },
                1,
                ADJUST_FADE_STEPS,
            ),
            FadeKind::AdjustSaturation(delta) => (
                FadePlan::Saturation {
                    step_offset: delta.clamp(-1.0, 1.0) / f32::from(ADJUST_FADE_STEPS),
                },
                1,
                ADJUST_FADE_STEPS,
            ),
        };

        // Integer millisecond pacing; a zero or sub-step duration degenerates
        // to zero delay while still executing every step.
        let step_delay = D::from_millis(request.duration.as_millis() / u64::from(last_frame));

        self.active = Some(ActiveFade {
            plan,
            next_frame: first_frame,
            last_frame,
            step_delay,
        });
        self.service()
    }

    /// Emits the next frame of the active fade.
    ///
    /// # Returns
    /// * `Ok(FadeTiming::Delay(d))` - Frame emitted, service again after `d`
    /// * `Ok(FadeTiming::Complete)` - All frames emitted, fader back to `Idle`
    /// * `Err(FaderError::NotFading)` - No fade in progress
    /// * `Err(FaderError::Sink(e))` - The sink rejected the frame; fade aborted
    pub fn service(&mut self) -> Result<FadeTiming<D>, FaderError<S::Error>> {
        let mut fade = match self.active.take() {
            Some(fade) => fade,
            None => return Err(FaderError::NotFading),
        };

        if fade.next_frame > fade.last_frame {
            return Ok(FadeTiming::Complete);
        }

        self.emit_frame(&fade)?;
        fade.next_frame += 1;
        self.active = Some(fade);
        Ok(FadeTiming::Delay(fade.step_delay))
    }

    /// Runs a fade to completion, sleeping through `pacer` between frames.
    ///
    /// Synchronous from the caller's perspective: returns only once the final
    /// frame has been pushed and the color state holds the target value.
    pub fn run<P: Delay<D>>(
        &mut self,
        request: FadeRequest<D>,
        pacer: &mut P,
    ) -> Result<(), FaderError<S::Error>> {
        let mut timing = self.begin(request)?;
        loop {
            match timing {
                FadeTiming::Delay(delay) => {
                    pacer.sleep(delay);
                    timing = self.service()?;
                }
                FadeTiming::Complete => return Ok(()),
            }
        }
    }

    /// Returns whether the fader is idle or mid-fade.
    pub fn state(&self) -> FaderState {
        if self.active.is_some() {
            FaderState::Fading
        } else {
            FaderState::Idle
        }
    }

    /// Returns true if a fade is in progress.
    pub fn is_fading(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the strip's color state.
    pub fn color_state(&self) -> &ColorState {
        &self.state
    }

    /// Returns a reference to the hardware sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the fader, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit_frame(&mut self, fade: &ActiveFade<D>) -> Result<(), FaderError<S::Error>> {
        match fade.plan {
            FadePlan::Color { from, to } => {
                let frame = if fade.next_frame == fade.last_frame {
                    // Final step writes the target verbatim, eliminating any
                    // rounding drift at the endpoint.
                    to
                } else {
                    let progress = f32::from(fade.next_frame) / f32::from(fade.last_frame);
                    from.into_format::<f32>()
                        .mix(to.into_format::<f32>(), progress)
                        .into_format()
                };
                self.push_color(frame)?;
                if fade.next_frame == fade.last_frame {
                    self.state.set_color(to);
                }
            }
            FadePlan::Brightness { from, delta } => {
                let level = brightness_frame(from, delta, fade.next_frame, fade.last_frame);
                self.state.set_brightness(i16::from(level));
                self.sink
                    .set_global_brightness(level)
                    .map_err(FaderError::Sink)?;
                // Brightness is realized by the sink as a multiplier baked
                // into the pushed frame, so the current color is re-pushed at
                // every level change.
                let color = self.state.color();
                self.push_color(color)?;
            }
            FadePlan::Saturation { step_offset } => {
                let frame = with_saturation_offset(self.state.color(), step_offset);
                self.state.set_color(frame);
                self.push_color(frame)?;
            }
        }
        Ok(())
    }

    fn push_color(&mut self, color: Srgb<u8>) -> Result<(), FaderError<S::Error>> {
        self.sink.set_all_pixels(color).map_err(FaderError::Sink)?;
        self.sink.show().map_err(FaderError::Sink)
    }
}

/// Brightness level at frame `frame` of `frames`, computed from the captured
/// start value so the endpoint is exactly `from + delta` (clamped). Clamping
/// mid-ramp keeps later frames pinned at the bound without short-circuiting.
fn brightness_frame(from: u8, delta: i16, frame: u16, frames: u16) -> u8 {
    if frame == frames {
        return (i32::from(from) + i32::from(delta)).clamp(0, 255) as u8;
    }
    let level = f32::from(from) + f32::from(delta) * f32::from(frame) / f32::from(frames);
    (level.clamp(0.0, 255.0) + 0.5) as u8
}
