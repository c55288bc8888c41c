//! In-memory model for Android vector drawable documents

/// A single drawable path.
///
/// The path data is carried as an opaque string; the Android command grammar
/// is compatible with SVG path syntax, so it is re-emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    /// Drawing commands (`android:pathData`)
    pub path_data: String,
    /// Fill color token (`android:fillColor`), either the 9-character
    /// `#AARRGGBB` Android form or something already SVG-compatible
    pub fill_color: String,
    /// Fill rule discriminator (`android:fillType`); parsed but not emitted
    pub fill_type: String,
}

/// An ordered run of paths wrapped in a single `<g>` element.
///
/// Grouping is flat: no transforms, no opacity, no nested sub-groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub paths: Vec<VectorPath>,
}

/// Root of a parsed vector drawable document.
///
/// Built once by the parser, read during SVG emission, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    /// Viewport width (`android:viewportWidth`), maps to the SVG viewBox
    pub width: f64,
    /// Viewport height (`android:viewportHeight`)
    pub height: f64,
    /// Top-level paths, in document order
    pub paths: Vec<VectorPath>,
    /// Groups, in document order, emitted after the top-level paths
    pub groups: Vec<Group>,
}
