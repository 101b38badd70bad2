use crate::config::AnimatorConfig;
use crate::foundation::core::{Canvas, FrameIndex, Point, Rgba8};
use crate::glyph::Glyph;
use crate::motion::rng::Rng64;

/// One glyph positioned on the surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphPlacement {
    /// Which glyph to draw.
    pub glyph: Glyph,
    /// Glyph center in surface pixels.
    pub center: Point,
    /// Em-box size in pixels.
    pub size_px: f64,
    /// Rotation about `center` in radians.
    pub rotation: f64,
}

impl GlyphPlacement {
    /// Lower-left corner of the em box (ignores rotation).
    pub fn bottom_left(&self) -> Point {
        let half = self.size_px / 2.0;
        Point::new(self.center.x - half, self.center.y + half)
    }
}

/// Resolved drawing instructions for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameScene {
    /// Position in the sequence.
    pub index: FrameIndex,
    /// Target surface size.
    pub canvas: Canvas,
    /// Full-surface fill drawn first.
    pub background: Rgba8,
    /// Glyphs in paint order: the cat, then the sparkles.
    pub placements: Vec<GlyphPlacement>,
}

impl FrameScene {
    /// Lay out frame `index`.
    ///
    /// The cat pose depends only on `index`; sparkles consume `cfg.sparkle_count * 3` draws
    /// from `rng` (x, y, size). The random point anchors a sparkle's lower-left corner, so
    /// sparkles near the top edge are partly clipped.
    pub fn build(cfg: &AnimatorConfig, index: FrameIndex, rng: &mut Rng64) -> Self {
        let pose = cfg.motion.pose_at(index);
        let mut placements = Vec::with_capacity(1 + cfg.sparkle_count as usize);
        placements.push(GlyphPlacement {
            glyph: Glyph::Cat,
            center: pose.center,
            size_px: cfg.cat_size_px,
            rotation: pose.rotation,
        });

        let w = f64::from(cfg.canvas.width);
        let h = f64::from(cfg.canvas.height);
        for _ in 0..cfg.sparkle_count {
            let x = rng.range_f64(0.0, w);
            let y = rng.range_f64(0.0, h);
            let size_px = rng.range_f64(cfg.sparkle_min_px, cfg.sparkle_max_px);
            let half = size_px / 2.0;
            placements.push(GlyphPlacement {
                glyph: Glyph::Sparkle,
                center: Point::new(x + half, y - half),
                size_px,
                rotation: 0.0,
            });
        }

        Self {
            index,
            canvas: cfg.canvas,
            background: cfg.background,
            placements,
        }
    }

    /// The cat placement (always the first glyph).
    pub fn cat(&self) -> Option<&GlyphPlacement> {
        self.placements.iter().find(|p| p.glyph == Glyph::Cat)
    }

    /// Decorative sparkle placements.
    pub fn sparkles(&self) -> impl Iterator<Item = &GlyphPlacement> {
        self.placements.iter().filter(|p| p.glyph == Glyph::Sparkle)
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
