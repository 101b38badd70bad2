use std::time::Duration;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{CatvidError, CatvidResult};
use crate::motion::path::BouncePath;

/// Fixed animator constants.
///
/// [`AnimatorConfig::default`] holds the values the page uses; other values exist so tests can
/// render small surfaces quickly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Drawing surface size.
    pub canvas: Canvas,
    /// Number of frames synthesized per generation.
    pub frame_count: u64,
    /// Playback cadence.
    #[serde(with = "duration_ms")]
    pub tick_interval: Duration,
    /// Decorative sparkles drawn on every frame.
    pub sparkle_count: u32,
    /// Cat glyph size in pixels.
    pub cat_size_px: f64,
    /// Smallest sparkle size in pixels (inclusive).
    pub sparkle_min_px: f64,
    /// Largest sparkle size in pixels (exclusive).
    pub sparkle_max_px: f64,
    /// Background fill.
    pub background: Rgba8,
    /// Cat motion over the frame sequence.
    pub motion: BouncePath,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 640,
                height: 480,
            },
            frame_count: 60,
            tick_interval: Duration::from_millis(33),
            sparkle_count: 5,
            cat_size_px: 80.0,
            sparkle_min_px: 10.0,
            sparkle_max_px: 30.0,
            background: Rgba8::opaque(0xfe, 0xf3, 0xc7),
            motion: BouncePath::default(),
        }
    }
}

impl AnimatorConfig {
    /// Check that the constants describe a drawable, playable animation.
    pub fn validate(&self) -> CatvidResult<()> {
        self.canvas.validate()?;
        if self.frame_count == 0 {
            return Err(CatvidError::validation("frame_count must be > 0"));
        }
        if self.tick_interval.is_zero() {
            return Err(CatvidError::validation("tick_interval must be > 0"));
        }
        if !self.cat_size_px.is_finite() || self.cat_size_px <= 0.0 {
            return Err(CatvidError::validation("cat_size_px must be finite and > 0"));
        }
        if !self.sparkle_min_px.is_finite()
            || !self.sparkle_max_px.is_finite()
            || self.sparkle_min_px <= 0.0
            || self.sparkle_min_px > self.sparkle_max_px
        {
            return Err(CatvidError::validation(
                "sparkle size range must satisfy 0 < min <= max",
            ));
        }
        Ok(())
    }
}

mod duration_ms {
    use std::time::Duration;

    pub(super) fn serialize<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ms = <u64 as serde::Deserialize>::deserialize(d)?;
        Ok(Duration::from_millis(ms))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
