//! SVG output for parsed vector drawables
//!
//! This module takes a [`Drawable`](crate::parser::Drawable) and produces
//! a minimal SVG document string, normalizing Android color tokens along
//! the way.

pub mod color;
pub mod svg;

pub use color::normalize_color;
pub use svg::emit_svg;
