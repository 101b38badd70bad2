//! Per-frame motion and randomness.

/// Sinusoidal bounce path for the cat.
pub mod path;
/// Seeded generator for decorative placement.
pub mod rng;
