use kurbo::{Circle, Ellipse, Shape};

use crate::foundation::core::{BezPath, Point, Rgba8};

const TOLERANCE: f64 = 1e-3;

/// Glyphs the animator knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// The bouncing cat face.
    Cat,
    /// Four-point decorative sparkle.
    Sparkle,
}

/// One filled shape of a glyph.
///
/// Coordinates are in glyph units: the glyph's em box is `[-0.5, 0.5]` on both axes, centered on
/// the origin, so scaling by the glyph size in pixels gives surface coordinates.
#[derive(Clone, Debug)]
pub struct GlyphLayer {
    /// Outline to fill (non-zero winding).
    pub path: BezPath,
    /// Fill color.
    pub color: Rgba8,
}

impl Glyph {
    /// Back-to-front fill layers for this glyph.
    pub fn layers(self) -> Vec<GlyphLayer> {
        match self {
            Glyph::Cat => cat_layers(),
            Glyph::Sparkle => sparkle_layers(),
        }
    }
}

fn layer(path: BezPath, color: Rgba8) -> GlyphLayer {
    GlyphLayer { path, color }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            p.move_to(Point::new(x, y));
        } else {
            p.line_to(Point::new(x, y));
        }
    }
    p.close_path();
    p
}

fn cat_layers() -> Vec<GlyphLayer> {
    let fur = Rgba8::opaque(0xf5, 0xa6, 0x23);
    let inner_ear = Rgba8::opaque(0xf9, 0xa8, 0xd4);
    let dark = Rgba8::opaque(0x3b, 0x2f, 0x2f);
    let nose = Rgba8::opaque(0xec, 0x48, 0x99);

    let mut out = vec![
        layer(polygon(&[(-0.42, -0.05), (-0.36, -0.47), (-0.08, -0.28)]), fur),
        layer(polygon(&[(0.42, -0.05), (0.36, -0.47), (0.08, -0.28)]), fur),
        layer(polygon(&[(-0.34, -0.12), (-0.32, -0.38), (-0.15, -0.25)]), inner_ear),
        layer(polygon(&[(0.34, -0.12), (0.32, -0.38), (0.15, -0.25)]), inner_ear),
        layer(
            Ellipse::new(Point::new(0.0, 0.06), (0.42, 0.36), 0.0).to_path(TOLERANCE),
            fur,
        ),
        layer(
            Ellipse::new(Point::new(-0.15, 0.0), (0.05, 0.08), 0.0).to_path(TOLERANCE),
            dark,
        ),
        layer(
            Ellipse::new(Point::new(0.15, 0.0), (0.05, 0.08), 0.0).to_path(TOLERANCE),
            dark,
        ),
        layer(polygon(&[(-0.05, 0.1), (0.05, 0.1), (0.0, 0.16)]), nose),
    ];

    // Whiskers: thin bars fanning out from each cheek.
    for side in [-1.0, 1.0] {
        for dy in [-0.03, 0.03] {
            let x0 = side * 0.12;
            let x1 = side * 0.5;
            let y0 = 0.15 + dy;
            let y1 = 0.15 + dy * 3.0;
            let bar = polygon(&[
                (x0, y0 - 0.006),
                (x1, y1 - 0.006),
                (x1, y1 + 0.006),
                (x0, y0 + 0.006),
            ]);
            out.push(layer(bar, dark));
        }
    }

    out
}

fn sparkle_layers() -> Vec<GlyphLayer> {
    let gold = Rgba8::opaque(0xfa, 0xcc, 0x15);
    let glint = Rgba8::opaque(0xff, 0xfb, 0xeb);

    let mut star = BezPath::new();
    star.move_to(Point::new(0.0, -0.5));
    star.quad_to(Point::new(0.0, 0.0), Point::new(0.5, 0.0));
    star.quad_to(Point::new(0.0, 0.0), Point::new(0.0, 0.5));
    star.quad_to(Point::new(0.0, 0.0), Point::new(-0.5, 0.0));
    star.quad_to(Point::new(0.0, 0.0), Point::new(0.0, -0.5));
    star.close_path();

    vec![
        layer(star, gold),
        layer(Circle::new(Point::ZERO, 0.06).to_path(TOLERANCE), glint),
    ]
}

#[cfg(test)]
#[path = "../tests/unit/glyph.rs"]
mod tests;
