use std::time::Duration;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CatvidError, CatvidResult};
use crate::generate::Frame;
use crate::playback::surface::DisplaySurface;
use crate::playback::timer::{IntervalTimers, TimerHandle, TimerId};

/// A running playback loop over a generated frame sequence.
///
/// Owns the frames and the redraw timer. Stopping (or dropping) the session cancels the timer.
#[derive(Debug)]
pub struct AnimationSession {
    frames: Vec<Frame>,
    current: FrameIndex,
    ticks: u64,
    timer: TimerHandle,
}

impl AnimationSession {
    /// Register the redraw timer and mark `surface` as playing.
    pub fn start(
        frames: Vec<Frame>,
        timers: &IntervalTimers,
        interval: Duration,
        surface: &mut dyn DisplaySurface,
    ) -> CatvidResult<Self> {
        if frames.is_empty() {
            return Err(CatvidError::validation("cannot play an empty frame sequence"));
        }
        let timer = timers.set_interval(interval)?;
        surface.set_playing(true);
        tracing::debug!(frames = frames.len(), timer = timer.id().0, "playback started");
        Ok(Self {
            frames,
            current: FrameIndex(0),
            ticks: 0,
            timer,
        })
    }

    /// Id of the redraw timer driving this session.
    pub fn timer_id(&self) -> TimerId {
        self.timer.id()
    }

    /// Index the next tick will draw.
    pub fn current_index(&self) -> FrameIndex {
        self.current
    }

    /// Ticks handled so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The frame sequence being played.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Draw the current frame, then advance, wrapping after the last frame.
    ///
    /// A frame that fails to decode is skipped for this tick; the index still advances.
    pub fn tick(&mut self, surface: &mut dyn DisplaySurface) {
        let len = self.frames.len() as u64;
        let idx = self.current;
        match self.frames[idx.0 as usize].decode() {
            Ok(rgba) => surface.draw_frame(idx, &rgba),
            Err(err) => tracing::warn!(frame = idx.0, error = %err, "frame decode failed"),
        }
        self.current = idx.next_wrapping(len);
        self.ticks += 1;
        tracing::trace!(frame = idx.0, tick = self.ticks, "tick");
    }

    /// Cancel the timer and clear the surface's playing indicator.
    pub fn stop(self, surface: &mut dyn DisplaySurface) {
        let Self { timer, ticks, .. } = self;
        timer.cancel();
        surface.set_playing(false);
        tracing::debug!(ticks, "playback stopped");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
