//! Looping playback of a generated frame sequence.
//!
//! Everything here runs on one thread: the host polls [`timer::IntervalTimers`] and hands each
//! due firing to the owner of the matching [`session::AnimationSession`].

/// Playback session and per-tick redraw.
pub mod session;
/// Visible drawing surface.
pub mod surface;
/// Host-driven interval timers.
pub mod timer;
