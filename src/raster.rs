//! Rasterization bridge
//!
//! Delegates actual painting to resvg: the emitted SVG is re-parsed with
//! usvg and rendered into a fixed-size tiny-skia pixmap, which is then
//! encoded as PNG.

use std::path::Path;

use resvg::{tiny_skia, usvg};
use thiserror::Error;

/// Errors from SVG rasterization and PNG encoding
#[derive(Error, Debug)]
pub enum RasterError {
    /// The generated SVG was rejected by the rasterizer
    #[error("failed to rasterize SVG: {0}")]
    InvalidSvg(#[from] usvg::Error),

    /// The pixel buffer could not be allocated
    #[error("failed to allocate a {0}x{1} pixel buffer")]
    Allocation(u32, u32),

    /// PNG encoding or writing failed
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// Target canvas size for rasterization
#[derive(Debug, Clone)]
pub struct RasterConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

impl RasterConfig {
    /// Create a configuration with the default 512x512 canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Rasterize an SVG document string into a pixmap.
///
/// The SVG viewBox is stretched onto the full canvas: width and height
/// scale independently, so a non-square viewport does not letterbox.
pub fn rasterize(svg: &str, config: &RasterConfig) -> Result<tiny_skia::Pixmap, RasterError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;

    let mut pixmap = tiny_skia::Pixmap::new(config.width, config.height)
        .ok_or(RasterError::Allocation(config.width, config.height))?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        config.width as f32 / size.width(),
        config.height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Encode a pixmap as PNG and write it to `path`
pub fn write_png(pixmap: &tiny_skia::Pixmap, path: &Path) -> Result<(), RasterError> {
    pixmap
        .save_png(path)
        .map_err(|e| RasterError::Encode(e.to_string()))
}
