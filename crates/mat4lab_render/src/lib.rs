//! Text Presentation Layer
//!
//! This crate puts the display layer's text on screen with wgpu. Text
//! is rasterized on the CPU into an RGBA framebuffer using an embedded
//! bitmap font, then uploaded as a texture and blitted to the surface
//! with a fullscreen triangle once per frame.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - wgpu device, queue, and surface management
//! - [`raster::TextRaster`] - CPU framebuffer implementing `TextTarget`
//! - [`blit::BlitPipeline`] - uploads the raster and draws it to the surface

pub mod blit;
pub mod context;
pub mod font;
pub mod raster;

pub use blit::BlitPipeline;
pub use context::{ContextError, RenderContext};
pub use raster::TextRaster;
