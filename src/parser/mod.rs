//! Parser for Android vector drawable XML

pub mod model;

pub use model::{Drawable, Group, VectorPath};

use roxmltree::{Document, Node};

use crate::error::ParseError;

/// Parse a vector drawable document into a [`Drawable`] tree.
///
/// Attribute lookup ignores namespaces, so both `viewportWidth` and the
/// usual `android:viewportWidth` form resolve. Unknown child elements
/// (gradients, clip paths, ...) are skipped. Missing or unparsable
/// attributes fall back to empty/zero values with a warning; only
/// malformed XML and a non-`vector` root are hard errors.
pub fn parse(text: &str) -> Result<Drawable, ParseError> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    if root.tag_name().name() != "vector" {
        return Err(ParseError::NotAVector {
            found: root.tag_name().name().to_string(),
        });
    }

    let width = viewport_attr(root, "viewportWidth");
    let height = viewport_attr(root, "viewportHeight");

    let mut paths = Vec::new();
    let mut groups = Vec::new();
    for child in root.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "path" => paths.push(parse_path(child)),
            "group" => groups.push(parse_group(child)),
            _ => {}
        }
    }

    Ok(Drawable {
        width,
        height,
        paths,
        groups,
    })
}

/// Look up an attribute by local name, ignoring any namespace prefix
fn attr_local<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}

fn viewport_attr(node: Node, name: &str) -> f64 {
    match attr_local(node, name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("invalid {} value '{}', using 0", name, value);
            0.0
        }),
        None => {
            log::warn!("missing {} attribute, using 0", name);
            0.0
        }
    }
}

fn parse_path(node: Node) -> VectorPath {
    let path_data = attr_local(node, "pathData").unwrap_or_else(|| {
        log::warn!("path element without pathData attribute");
        ""
    });

    VectorPath {
        path_data: path_data.to_string(),
        fill_color: attr_local(node, "fillColor").unwrap_or_default().to_string(),
        fill_type: attr_local(node, "fillType").unwrap_or_default().to_string(),
    }
}

fn parse_group(node: Node) -> Group {
    let paths = node
        .children()
        .filter(Node::is_element)
        .filter(|c| c.tag_name().name() == "path")
        .map(parse_path)
        .collect();

    Group { paths }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespaced_attributes() {
        let xml = r##"<vector xmlns:android="http://schemas.android.com/apk/res/android"
            android:width="24dp"
            android:height="24dp"
            android:viewportWidth="24"
            android:viewportHeight="24">
            <path android:pathData="M12 2L2 22" android:fillColor="#FF000000"/>
        </vector>"##;

        let drawable = parse(xml).expect("Should parse");
        assert_eq!(drawable.width, 24.0);
        assert_eq!(drawable.height, 24.0);
        assert_eq!(drawable.paths.len(), 1);
        assert_eq!(drawable.paths[0].path_data, "M12 2L2 22");
        assert_eq!(drawable.paths[0].fill_color, "#FF000000");
    }

    #[test]
    fn test_parse_plain_attributes() {
        let xml = r#"<vector viewportWidth="10.5" viewportHeight="20">
            <path pathData="M0 0" fillColor="red" fillType="evenOdd"/>
        </vector>"#;

        let drawable = parse(xml).expect("Should parse");
        assert_eq!(drawable.width, 10.5);
        assert_eq!(drawable.height, 20.0);
        assert_eq!(drawable.paths[0].fill_type, "evenOdd");
    }

    #[test]
    fn test_parse_groups_after_paths() {
        let xml = r##"<vector viewportWidth="24" viewportHeight="24">
            <path pathData="M1 1" fillColor="#FF111111"/>
            <group>
                <path pathData="M2 2" fillColor="#FF222222"/>
                <path pathData="M3 3" fillColor="#FF333333"/>
            </group>
        </vector>"##;

        let drawable = parse(xml).expect("Should parse");
        assert_eq!(drawable.paths.len(), 1);
        assert_eq!(drawable.groups.len(), 1);
        assert_eq!(drawable.groups[0].paths.len(), 2);
        assert_eq!(drawable.groups[0].paths[1].path_data, "M3 3");
    }

    #[test]
    fn test_parse_ignores_unknown_elements() {
        let xml = r##"<vector viewportWidth="24" viewportHeight="24">
            <clip-path pathData="M0 0H24V24Z"/>
            <path pathData="M1 1" fillColor="#FF111111"/>
        </vector>"##;

        let drawable = parse(xml).expect("Should parse");
        assert_eq!(drawable.paths.len(), 1);
        assert!(drawable.groups.is_empty());
    }

    #[test]
    fn test_parse_missing_attributes_default() {
        let xml = r#"<vector><path/></vector>"#;

        let drawable = parse(xml).expect("Should parse");
        assert_eq!(drawable.width, 0.0);
        assert_eq!(drawable.height, 0.0);
        assert_eq!(drawable.paths[0].path_data, "");
        assert_eq!(drawable.paths[0].fill_color, "");
    }

    #[test]
    fn test_parse_malformed_xml_errors() {
        let result = parse("<vector><path</vector>");
        assert!(matches!(result, Err(ParseError::Xml(_))));
    }

    #[test]
    fn test_parse_wrong_root_errors() {
        let result = parse("<svg viewBox=\"0 0 1 1\"/>");
        assert!(matches!(
            result,
            Err(ParseError::NotAVector { found }) if found == "svg"
        ));
    }
}
