use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::AnimatorConfig;
use crate::encode::png::{decode_png, encode_png};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CatvidError, CatvidResult};
use crate::motion::rng::Rng64;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::scene::FrameScene;

/// One encoded still image of the sequence. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Position in the sequence.
    pub index: FrameIndex,
    /// PNG bytes.
    pub png: Arc<[u8]>,
}

impl Frame {
    /// Decode back to premultiplied pixels.
    pub fn decode(&self) -> CatvidResult<FrameRGBA> {
        decode_png(&self.png)
    }
}

/// Synthesize `cfg.frame_count` frames in index order.
///
/// Any drawing or encoding failure discards the partial sequence and is reported as
/// [`CatvidError::GenerationFailed`]; the underlying cause is logged.
#[tracing::instrument(skip(cfg, backend), fields(frames = cfg.frame_count))]
pub fn generate_frames(
    cfg: &AnimatorConfig,
    backend: &mut dyn RenderBackend,
    seed: u64,
) -> CatvidResult<Vec<Frame>> {
    match try_generate(cfg, backend, seed) {
        Ok(frames) => {
            tracing::debug!(count = frames.len(), "frame sequence ready");
            Ok(frames)
        }
        Err(err) => {
            tracing::warn!(error = %err, "frame generation failed");
            Err(CatvidError::GenerationFailed)
        }
    }
}

fn try_generate(
    cfg: &AnimatorConfig,
    backend: &mut dyn RenderBackend,
    seed: u64,
) -> CatvidResult<Vec<Frame>> {
    cfg.validate()?;
    let mut rng = Rng64::new(seed);
    let mut frames = Vec::with_capacity(cfg.frame_count.min(4096) as usize);
    for i in 0..cfg.frame_count {
        let scene = FrameScene::build(cfg, FrameIndex(i), &mut rng);
        let rgba = backend.render_scene(&scene)?;
        let png = encode_png(&rgba)?;
        frames.push(Frame {
            index: FrameIndex(i),
            png: png.into(),
        });
    }
    Ok(frames)
}

/// Render frame `index` exactly as [`generate_frames`] would with the same `seed`.
///
/// Errors are returned as-is rather than collapsed, for diagnostics.
pub fn render_single_frame(
    cfg: &AnimatorConfig,
    backend: &mut dyn RenderBackend,
    index: FrameIndex,
    seed: u64,
) -> CatvidResult<FrameRGBA> {
    cfg.validate()?;
    if index.0 >= cfg.frame_count {
        return Err(CatvidError::validation(format!(
            "frame {} is out of bounds (frame_count = {})",
            index.0, cfg.frame_count
        )));
    }
    let mut rng = Rng64::new(seed);
    // Replay earlier layouts so the sparkle stream lines up with a full run.
    for i in 0..index.0 {
        let _ = FrameScene::build(cfg, FrameIndex(i), &mut rng);
    }
    let scene = FrameScene::build(cfg, index, &mut rng);
    backend.render_scene(&scene)
}

/// A seed that differs between runs.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

#[cfg(test)]
#[path = "../tests/unit/generate.rs"]
mod tests;
