//! Frame rasterization.
//!
//! Backends draw a [`FrameScene`](crate::scene::FrameScene) into premultiplied RGBA8 pixels.

/// Backend trait and raster readback type.
pub mod backend;
/// `vello_cpu` software backend.
pub mod cpu;
