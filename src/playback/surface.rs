use crate::foundation::core::{Canvas, FrameIndex};
use crate::render::backend::FrameRGBA;

/// The visible drawing surface frames are played onto.
pub trait DisplaySurface {
    /// Draw `frame` at the surface origin.
    fn draw_frame(&mut self, index: FrameIndex, frame: &FrameRGBA);
    /// Toggle the "playing" indicator.
    fn set_playing(&mut self, playing: bool);
    /// Current "playing" indicator.
    fn is_playing(&self) -> bool;
}

/// In-memory RGBA surface.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    pixels: FrameRGBA,
    playing: bool,
    draws: u64,
    last_drawn: Option<FrameIndex>,
}

impl PixelSurface {
    /// Transparent surface of the given size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            pixels: FrameRGBA::filled(canvas.width, canvas.height, [0, 0, 0, 0]),
            playing: false,
            draws: 0,
            last_drawn: None,
        }
    }

    /// Current pixels (premultiplied).
    pub fn pixels(&self) -> &FrameRGBA {
        &self.pixels
    }

    /// Total frames drawn since creation.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    /// Index of the most recently drawn frame.
    pub fn last_drawn(&self) -> Option<FrameIndex> {
        self.last_drawn
    }
}

impl DisplaySurface for PixelSurface {
    fn draw_frame(&mut self, index: FrameIndex, frame: &FrameRGBA) {
        blit(&mut self.pixels, frame);
        self.draws += 1;
        self.last_drawn = Some(index);
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// Copy `src` onto `dst` at the origin, clipped to `dst`.
fn blit(dst: &mut FrameRGBA, src: &FrameRGBA) {
    let w = dst.width.min(src.width) as usize;
    let h = dst.height.min(src.height) as usize;
    let dst_stride = dst.width as usize * 4;
    let src_stride = src.width as usize * 4;
    if dst.data.len() < dst_stride * dst.height as usize
        || src.data.len() < src_stride * src.height as usize
    {
        return;
    }
    for y in 0..h {
        let d = y * dst_stride;
        let s = y * src_stride;
        dst.data[d..d + w * 4].copy_from_slice(&src.data[s..s + w * 4]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/surface.rs"]
mod tests;
