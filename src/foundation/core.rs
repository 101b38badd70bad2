use crate::foundation::error::{CatvidError, CatvidResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// 0-based position of a frame in the generated sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Advance by one frame, wrapping to 0 at `len`.
    ///
    /// `len == 0` always yields frame 0.
    pub fn next_wrapping(self, len: u64) -> Self {
        if len == 0 {
            return Self(0);
        }
        Self((self.0 + 1) % len)
    }
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject empty surfaces and surfaces the raster backend cannot address.
    pub fn validate(self) -> CatvidResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CatvidError::validation("canvas width/height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(CatvidError::validation("canvas width/height must fit in u16"));
        }
        Ok(())
    }

    /// Center point of the surface.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Number of RGBA8 bytes in one full-surface raster.
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> CatvidResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> CatvidResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| CatvidError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(CatvidError::validation("hex color must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self::opaque(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(CatvidError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            )),
        }
    }

    /// Premultiplied RGBA8 bytes, as stored in raster surfaces.
    pub fn to_premul_array(self) -> [u8; 4] {
        let a = u16::from(self.a);
        let premul = |c: u8| -> u8 { (((u16::from(c) * a) + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
