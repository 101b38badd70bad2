use crate::app::view::ViewModel;
use crate::config::AnimatorConfig;
use crate::foundation::error::{CatvidError, CatvidResult};
use crate::generate::generate_frames;
use crate::motion::rng::Rng64;
use crate::playback::session::AnimationSession;
use crate::playback::surface::{DisplaySurface, PixelSurface};
use crate::playback::timer::{IntervalTimers, TimerId};
use crate::render::backend::RenderBackend;

/// Coarse lifecycle phase, as the page sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing generated or playing.
    Idle,
    /// Frames are being synthesized.
    Generating,
    /// Frames are looping on the surface.
    Playing,
}

/// Animator state. The session only exists while playing.
#[derive(Debug)]
pub enum AnimatorState {
    /// Waiting for a start; `error` holds the banner from the last failed generation.
    Idle {
        /// Banner text, if the last generation failed.
        error: Option<String>,
    },
    /// Between the start click and the end of synthesis.
    Generating,
    /// Looping playback.
    Playing(AnimationSession),
}

/// Result of pressing the start control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The control was disabled (already generating or playing); nothing happened.
    Ignored,
    /// Frames were generated and playback started.
    Playing,
    /// Generation failed; the animator is idle with the error banner set.
    Failed,
}

/// The frame animator: `Idle -> Generating -> Playing -> Idle`, or `Generating -> Idle` on error.
pub struct Animator<S = PixelSurface> {
    cfg: AnimatorConfig,
    backend: Box<dyn RenderBackend>,
    timers: IntervalTimers,
    surface: S,
    seeds: Rng64,
    state: AnimatorState,
}

impl<S: DisplaySurface> Animator<S> {
    /// Build an idle animator. Each generation draws a fresh sparkle seed from `seed`.
    pub fn new(
        cfg: AnimatorConfig,
        backend: Box<dyn RenderBackend>,
        timers: IntervalTimers,
        surface: S,
        seed: u64,
    ) -> CatvidResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            backend,
            timers,
            surface,
            seeds: Rng64::new(seed),
            state: AnimatorState::Idle { error: None },
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            AnimatorState::Idle { .. } => Phase::Idle,
            AnimatorState::Generating => Phase::Generating,
            AnimatorState::Playing(_) => Phase::Playing,
        }
    }

    /// Full state.
    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    /// Banner text from the last failed generation.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            AnimatorState::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether the start control is enabled.
    pub fn can_start(&self) -> bool {
        matches!(self.state, AnimatorState::Idle { .. })
    }

    /// The active session while playing.
    pub fn session(&self) -> Option<&AnimationSession> {
        match &self.state {
            AnimatorState::Playing(session) => Some(session),
            _ => None,
        }
    }

    /// The visible drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Timer registry the session's redraw timer lives in.
    pub fn timers(&self) -> &IntervalTimers {
        &self.timers
    }

    /// Configuration in use.
    pub fn config(&self) -> &AnimatorConfig {
        &self.cfg
    }

    /// What the page shows right now.
    pub fn view(&self) -> ViewModel {
        ViewModel::for_state(self.phase(), self.error())
    }

    /// `Idle -> Generating`. Clears any previous error banner.
    ///
    /// Returns `false` (and changes nothing) when the start control is disabled.
    pub fn begin_generation(&mut self) -> bool {
        if !self.can_start() {
            tracing::debug!(phase = ?self.phase(), "start ignored");
            return false;
        }
        self.state = AnimatorState::Generating;
        true
    }

    /// `Generating -> Playing`, or `Generating -> Idle` with the banner set on failure.
    ///
    /// Synthesis runs synchronously to completion. Outside `Generating` this is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn finish_generation(&mut self) -> Phase {
        if !matches!(self.state, AnimatorState::Generating) {
            return self.phase();
        }

        let seed = self.seeds.next_u64();
        let started =
            generate_frames(&self.cfg, self.backend.as_mut(), seed).and_then(|frames| {
                AnimationSession::start(
                    frames,
                    &self.timers,
                    self.cfg.tick_interval,
                    &mut self.surface,
                )
            });

        self.state = match started {
            Ok(session) => AnimatorState::Playing(session),
            Err(err) => {
                tracing::warn!(error = %err, "generation aborted");
                self.surface.set_playing(false);
                AnimatorState::Idle {
                    error: Some(CatvidError::GenerationFailed.to_string()),
                }
            }
        };
        self.phase()
    }

    /// Press the start control.
    pub fn start(&mut self) -> StartOutcome {
        if !self.begin_generation() {
            return StartOutcome::Ignored;
        }
        match self.finish_generation() {
            Phase::Playing => StartOutcome::Playing,
            _ => StartOutcome::Failed,
        }
    }

    /// Press the stop control. `Playing -> Idle`; a no-op in any other phase.
    ///
    /// Returns whether a session was stopped.
    pub fn stop(&mut self) -> bool {
        if !matches!(self.state, AnimatorState::Playing(_)) {
            return false;
        }
        let prev = std::mem::replace(&mut self.state, AnimatorState::Idle { error: None });
        if let AnimatorState::Playing(session) = prev {
            session.stop(&mut self.surface);
        }
        true
    }

    /// Deliver a timer firing. Only the active session's timer draws anything.
    ///
    /// Returns whether a tick was handled.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match &mut self.state {
            AnimatorState::Playing(session) if session.timer_id() == id => {
                session.tick(&mut self.surface);
                true
            }
            _ => {
                tracing::debug!(timer = id.0, "stale timer firing ignored");
                false
            }
        }
    }

    /// Deliver the firings due at or before `now`, in order. Returns the number of ticks drawn.
    ///
    /// Ticks missed by a late host are coalesced, so this draws at most once per call.
    pub fn pump(&mut self, now: std::time::Duration) -> u64 {
        let mut drawn = 0;
        while let Some(id) = self.timers.poll_due(now) {
            if self.on_timer(id) {
                drawn += 1;
            }
        }
        self.timers.settle(now);
        drawn
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
