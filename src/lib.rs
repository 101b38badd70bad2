//! catvid draws a looping animation of a cat bouncing across a surface, with sparkles.
//!
//! On start, a fixed-length sequence of frames is synthesized up front and then redrawn on a
//! fixed-interval timer until stopped. Nothing is exported as a video file; frames only loop.
//!
//! # Pipeline overview
//!
//! 1. **Lay out**: `AnimatorConfig + FrameIndex + Rng64 -> FrameScene` (cat pose, sparkles)
//! 2. **Render**: `FrameScene -> FrameRGBA` (`vello_cpu` backend)
//! 3. **Encode**: `FrameRGBA -> Frame` (PNG bytes)
//! 4. **Play**: `AnimationSession` draws frame `k mod N` on tick `k` onto a [`DisplaySurface`]
//!
//! [`Animator`] ties these together as an explicit `Idle / Generating / Playing` state machine,
//! and [`ViewModel`] describes what the page shows in each state.
//!
//! Everything runs on one thread. Timers only advance when the host polls them, which keeps
//! playback deterministic under test.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod app;
mod config;
mod encode;
mod foundation;
mod generate;
mod glyph;
mod motion;
mod playback;
mod render;
mod scene;

pub use app::state::{Animator, AnimatorState, Phase, StartOutcome};
pub use app::view::{ControlView, Stage, ViewModel};
pub use config::AnimatorConfig;
pub use encode::png::{decode_png, encode_png};
pub use foundation::core::{Affine, BezPath, Canvas, FrameIndex, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{CatvidError, CatvidResult};
pub use generate::{Frame, generate_frames, render_single_frame, seed_from_clock};
pub use glyph::{Glyph, GlyphLayer};
pub use motion::path::{BouncePath, Pose};
pub use motion::rng::Rng64;
pub use playback::session::AnimationSession;
pub use playback::surface::{DisplaySurface, PixelSurface};
pub use playback::timer::{IntervalTimers, TimerHandle, TimerId};
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use render::cpu::CpuBackend;
pub use scene::{FrameScene, GlyphPlacement};
