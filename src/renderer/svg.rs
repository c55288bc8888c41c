//! SVG generation from the drawable model

use crate::parser::{Drawable, VectorPath};

use super::color::normalize_color;

/// Serialize a [`Drawable`] into a minimal single-line SVG document.
///
/// The viewBox spans `0 0 <width> <height>` with both dimensions formatted
/// to one decimal place. Top-level paths come first, then each group as a
/// `<g>` wrapper around its paths, all in document order. Path data is
/// emitted raw: the Android format already keeps it XML-safe, so no
/// escaping is applied.
pub fn emit_svg(drawable: &Drawable) -> String {
    let mut svg = format!(
        r#"<svg viewBox="0 0 {:.1} {:.1}" xmlns="http://www.w3.org/2000/svg">"#,
        drawable.width, drawable.height
    );

    for path in &drawable.paths {
        push_path(&mut svg, path);
    }

    for group in &drawable.groups {
        svg.push_str("<g>");
        for path in &group.paths {
            push_path(&mut svg, path);
        }
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

fn push_path(svg: &mut String, path: &VectorPath) {
    let fill = normalize_color(&path.fill_color);
    svg.push_str(&format!(
        r#"<path d="{}" fill="{}"/>"#,
        path.path_data, fill
    ));
}
