//! vd2png - render Android vector drawable XML files to PNG
//!
//! The pipeline is a single linear pass: parse the drawable XML into a
//! typed tree, serialize that tree as a minimal SVG document, then hand
//! the SVG to resvg for rasterization and PNG encoding.
//!
//! # Example
//!
//! ```rust
//! use vd2png::svg_from_str;
//!
//! let svg = svg_from_str(r##"
//!     <vector xmlns:android="http://schemas.android.com/apk/res/android"
//!         android:viewportWidth="24" android:viewportHeight="24">
//!         <path android:pathData="M12 2L2 22" android:fillColor="#FF000000"/>
//!     </vector>
//! "##).unwrap();
//!
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r##"fill="#000000""##));
//! ```

pub mod error;
pub mod parser;
pub mod raster;
pub mod renderer;

pub use error::ParseError;
pub use parser::{parse, Drawable, Group, VectorPath};
pub use raster::{rasterize, write_png, RasterConfig, RasterError};
pub use renderer::{emit_svg, normalize_color};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during the convert pipeline
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input drawable could not be read
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input drawable could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// An output artifact could not be written
    #[error("failed to write '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rasterization or PNG encoding failed
    #[error("raster error: {0}")]
    Raster(#[from] RasterError),
}

/// Configuration for a complete conversion run
///
/// Resolved once from CLI arguments; the pipeline itself holds no global
/// state.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Input vector drawable XML file
    pub input: PathBuf,
    /// Final PNG output file
    pub output: PathBuf,
    /// Canvas size for rasterization
    pub raster: RasterConfig,
}

impl ConvertConfig {
    /// Create a configuration for the given input/output pair
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            raster: RasterConfig::default(),
        }
    }

    /// Set the rasterization configuration
    pub fn with_raster(mut self, raster: RasterConfig) -> Self {
        self.raster = raster;
        self
    }

    /// Path of the intermediate SVG artifact, derived from the output
    /// name by extension substitution
    pub fn svg_output(&self) -> PathBuf {
        self.output.with_extension("svg")
    }
}

/// Convert vector drawable XML text to an SVG document string
pub fn svg_from_str(xml: &str) -> Result<String, ParseError> {
    Ok(emit_svg(&parse(xml)?))
}

/// Run the full pipeline: read the drawable, write the intermediate SVG
/// next to the output, rasterize, and write the PNG.
///
/// The SVG artifact is always written, even though it is only an
/// intermediate step.
pub fn convert(config: &ConvertConfig) -> Result<(), ConvertError> {
    let xml = fs::read_to_string(&config.input).map_err(|source| ConvertError::ReadInput {
        path: config.input.clone(),
        source,
    })?;

    let svg = svg_from_str(&xml)?;

    let svg_path = config.svg_output();
    write_text(&svg_path, &svg)?;

    let pixmap = rasterize(&svg, &config.raster)?;
    write_png(&pixmap, &config.output).map_err(ConvertError::Raster)?;

    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<(), ConvertError> {
    fs::write(path, text).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_from_str_exact_output() {
        let xml = r##"<vector xmlns:android="http://schemas.android.com/apk/res/android"
            android:viewportWidth="24" android:viewportHeight="24">
            <path android:pathData="M12 2L2 22" android:fillColor="#FF000000"/>
        </vector>"##;

        let svg = svg_from_str(xml).unwrap();
        assert_eq!(
            svg,
            r##"<svg viewBox="0 0 24.0 24.0" xmlns="http://www.w3.org/2000/svg"><path d="M12 2L2 22" fill="#000000"/></svg>"##
        );
    }

    #[test]
    fn test_svg_from_str_parse_error() {
        assert!(svg_from_str("<vector").is_err());
    }

    #[test]
    fn test_svg_output_naming() {
        let config = ConvertConfig::new("icon.xml", "icon.png");
        assert_eq!(config.svg_output(), PathBuf::from("icon.svg"));
    }

    #[test]
    fn test_svg_output_follows_output_name() {
        // The SVG artifact sits next to the PNG, not next to the input
        let config = ConvertConfig::new("assets/icon.xml", "out/result.png");
        assert_eq!(config.svg_output(), PathBuf::from("out/result.svg"));
    }
}
