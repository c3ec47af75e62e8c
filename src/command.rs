//! Command front end for a strip fader.
//!
//! Maps remote-control commands to fades. [`FaderControl`] exposes the three
//! synchronous entry points (each returns only after its fade has run to
//! completion) plus preset nudges using the configured step sizes, and a
//! bounded queue for callers that submit commands while driving the fader
//! incrementally. One fade at a time: a queued command waits for the active
//! fade to finish.

use crate::config::FaderConfig;
use crate::fader::{FadeTiming, StripFader, StripSink};
use crate::state::ColorState;
use crate::time::{Delay, TimeDuration};
use crate::types::{FadeRequest, FaderError};
use heapless::Deque;
use palette::Srgb;

/// A remote-control command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaderCommand {
    /// Fade the strip to an absolute color.
    SetColor(Srgb<u8>),
    /// Nudge brightness by a signed amount.
    AdjustBrightness(i16),
    /// Nudge saturation by a signed amount in [-1.0, 1.0].
    AdjustSaturation(f32),
}

/// Binds a [`StripFader`], its configuration and a pacer into a command
/// interface.
///
/// # Type Parameters
/// * `D` - Duration type
/// * `S` - Strip sink implementation type
/// * `P` - Pacer used by the synchronous entry points
/// * `N` - Capacity of the pending-command queue
pub struct FaderControl<D: TimeDuration, S: StripSink, P: Delay<D>, const N: usize> {
    fader: StripFader<D, S>,
    pacer: P,
    config: FaderConfig<D>,
    pending: Deque<FaderCommand, N>,
}

impl<D: TimeDuration, S: StripSink, P: Delay<D>, const N: usize> FaderControl<D, S, P, N> {
    /// Creates a control front end around a new fader.
    pub fn new(sink: S, pacer: P, config: FaderConfig<D>) -> Self {
        Self {
            fader: StripFader::new(sink),
            pacer,
            config,
            pending: Deque::new(),
        }
    }

    /// Fades the strip to `rgb` over the configured duration. Returns after
    /// the fade completes.
    pub fn request_set_color(&mut self, rgb: Srgb<u8>) -> Result<(), FaderError<S::Error>> {
        self.handle(FaderCommand::SetColor(rgb))
    }

    /// Fades brightness by `delta`, clamping at [0, 255]. Returns after the
    /// fade completes.
    pub fn request_adjust_brightness(&mut self, delta: i16) -> Result<(), FaderError<S::Error>> {
        self.handle(FaderCommand::AdjustBrightness(delta))
    }

    /// Fades saturation by `delta` in [-1.0, 1.0], clamping at [0, 1].
    /// Returns after the fade completes.
    pub fn request_adjust_saturation(&mut self, delta: f32) -> Result<(), FaderError<S::Error>> {
        self.handle(FaderCommand::AdjustSaturation(delta))
    }

    /// Raises brightness by the configured step.
    pub fn brightness_up(&mut self) -> Result<(), FaderError<S::Error>> {
        self.request_adjust_brightness(self.config.brightness_step)
    }

    /// Lowers brightness by the configured step.
    pub fn brightness_down(&mut self) -> Result<(), FaderError<S::Error>> {
        self.request_adjust_brightness(-self.config.brightness_step)
    }

    /// Raises saturation by the configured step.
    pub fn saturation_up(&mut self) -> Result<(), FaderError<S::Error>> {
        self.request_adjust_saturation(self.config.saturation_step)
    }

    /// Lowers saturation by the configured step.
    pub fn saturation_down(&mut self) -> Result<(), FaderError<S::Error>> {
        self.request_adjust_saturation(-self.config.saturation_step)
    }

    /// Dispatches a command and runs its fade to completion.
    pub fn handle(&mut self, command: FaderCommand) -> Result<(), FaderError<S::Error>> {
        let request = self.request_for(command);
        self.fader.run(request, &mut self.pacer)
    }

    /// Queues a command for incremental execution via [`service`](Self::service).
    ///
    /// Commands run strictly in submission order, one fade at a time. Returns
    /// the command back if the queue is full.
    pub fn submit(&mut self, command: FaderCommand) -> Result<(), FaderCommand> {
        self.pending.push_back(command)
    }

    /// Advances execution by one frame.
    ///
    /// Steps the active fade if one is mid-flight, otherwise begins the next
    /// queued command. Returns `FadeTiming::Complete` when there is nothing
    /// left to do.
    pub fn service(&mut self) -> Result<FadeTiming<D>, FaderError<S::Error>> {
        if self.fader.is_fading() {
            let timing = self.fader.service()?;
            if matches!(timing, FadeTiming::Complete) {
                return self.begin_next();
            }
            return Ok(timing);
        }
        self.begin_next()
    }

    /// Returns the number of queued commands.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns the strip's color state.
    pub fn color_state(&self) -> &ColorState {
        self.fader.color_state()
    }

    /// Returns the underlying fader.
    pub fn fader(&self) -> &StripFader<D, S> {
        &self.fader
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &FaderConfig<D> {
        &self.config
    }

    fn begin_next(&mut self) -> Result<FadeTiming<D>, FaderError<S::Error>> {
        match self.pending.pop_front() {
            Some(command) => {
                let request = self.request_for(command);
                self.fader.begin(request)
            }
            None => Ok(FadeTiming::Complete),
        }
    }

    fn request_for(&self, command: FaderCommand) -> FadeRequest<D> {
        let duration = self.config.fade_duration;
        match command {
            FaderCommand::SetColor(rgb) => FadeRequest::set_color(rgb, duration),
            FaderCommand::AdjustBrightness(delta) => FadeRequest::adjust_brightness(delta, duration),
            FaderCommand::AdjustSaturation(delta) => FadeRequest::adjust_saturation(delta, duration),
        }
    }
}
