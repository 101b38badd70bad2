use crate::foundation::error::{CatvidError, CatvidResult};
use crate::scene::FrameScene;

/// Raster readback of one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Build a frame, checking the buffer length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> CatvidResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if data.len() != expected {
            return Err(CatvidError::render(format!(
                "frame byte len {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame filled with one premultiplied color.
    pub fn filled(width: u32, height: u32, rgba_premul: [u8; 4]) -> Self {
        let px = (width as usize).saturating_mul(height as usize);
        let mut data = Vec::with_capacity(px.saturating_mul(4));
        for _ in 0..px {
            data.extend_from_slice(&rgba_premul);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Premultiplied pixel at `(x, y)`, if inside the frame and backed by `data`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// The drawing surface used during synthesis.
pub trait RenderBackend {
    /// Draw `scene` from scratch and read back the pixels.
    fn render_scene(&mut self, scene: &FrameScene) -> CatvidResult<FrameRGBA>;
}

/// Available raster backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// `vello_cpu` software rasterizer.
    Cpu,
}

/// Construct a boxed backend of the requested kind.
pub fn create_backend(kind: BackendKind) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
