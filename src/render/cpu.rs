use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::core::{Affine, BezPath, Rgba8};
use crate::foundation::error::{CatvidError, CatvidResult};
use crate::glyph::Glyph;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::scene::FrameScene;

struct CpuLayer {
    path: vello_cpu::kurbo::BezPath,
    color: vello_cpu::peniko::Color,
}

/// CPU backend powered by `vello_cpu`.
///
/// The render context is kept between frames and reset before each one; glyph outlines are
/// converted once and cached.
pub struct CpuBackend {
    ctx: Option<vello_cpu::RenderContext>,
    glyph_cache: HashMap<Glyph, Arc<Vec<CpuLayer>>>,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    /// Create a backend with no surface allocated yet.
    pub fn new() -> Self {
        Self {
            ctx: None,
            glyph_cache: HashMap::new(),
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> CatvidResult<R>,
    ) -> CatvidResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn layers_for(&mut self, glyph: Glyph) -> Arc<Vec<CpuLayer>> {
        self.glyph_cache
            .entry(glyph)
            .or_insert_with(|| {
                Arc::new(
                    glyph
                        .layers()
                        .iter()
                        .map(|l| CpuLayer {
                            path: bezpath_to_cpu(&l.path),
                            color: color_to_cpu(l.color),
                        })
                        .collect(),
                )
            })
            .clone()
    }
}

impl RenderBackend for CpuBackend {
    fn render_scene(&mut self, scene: &FrameScene) -> CatvidResult<FrameRGBA> {
        scene.canvas.validate()?;
        let w: u16 = scene
            .canvas
            .width
            .try_into()
            .map_err(|_| CatvidError::render("surface width exceeds u16"))?;
        let h: u16 = scene
            .canvas
            .height
            .try_into()
            .map_err(|_| CatvidError::render("surface height exceeds u16"))?;

        self.with_ctx_mut(w, h, |this, ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_cpu(scene.background));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));

            for placement in &scene.placements {
                if !placement.center.x.is_finite()
                    || !placement.center.y.is_finite()
                    || !placement.size_px.is_finite()
                    || !placement.rotation.is_finite()
                {
                    return Err(CatvidError::render(format!(
                        "non-finite {:?} placement on frame {}",
                        placement.glyph, scene.index.0
                    )));
                }
                let tr = Affine::translate(placement.center.to_vec2())
                    * Affine::rotate(placement.rotation)
                    * Affine::scale(placement.size_px);
                ctx.set_transform(affine_to_cpu(tr));
                for layer in this.layers_for(placement.glyph).iter() {
                    ctx.set_paint(layer.color);
                    ctx.fill_path(&layer.path);
                }
            }

            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            FrameRGBA::new(
                u32::from(w),
                u32::from(h),
                pixmap.data_as_u8_slice().to_vec(),
            )
        })
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
