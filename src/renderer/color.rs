//! Android-to-SVG color normalization

use std::borrow::Cow;

/// Strip the alpha channel from an Android `#AARRGGBB` color token.
///
/// A 9-character token keeps `#` plus its last six hex digits; anything
/// else (named colors, 6-digit RGB, malformed tokens) passes through
/// verbatim. No validation is performed.
pub fn normalize_color(token: &str) -> Cow<'_, str> {
    if token.len() == 9 {
        // The slice can only fail on multi-byte characters; such tokens
        // are not Android colors, so they pass through like any other.
        if let Some(rgb) = token.get(3..) {
            return Cow::Owned(format!("#{}", rgb));
        }
    }
    Cow::Borrowed(token)
}
