use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{CatvidError, CatvidResult};
use crate::render::backend::FrameRGBA;

/// Encode a premultiplied frame as PNG (straight alpha on disk).
pub fn encode_png(frame: &FrameRGBA) -> CatvidResult<Vec<u8>> {
    let mut rgba = frame.data.clone();
    unpremultiply_rgba8_in_place(&mut rgba);
    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| CatvidError::encode("frame buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode frame as png")?;
    Ok(buf)
}

/// Decode PNG bytes into a premultiplied frame.
pub fn decode_png(bytes: &[u8]) -> CatvidResult<FrameRGBA> {
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .context("decode png frame")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    FrameRGBA::new(width, height, data)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
