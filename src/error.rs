//! Error types for vector drawable parsing

use thiserror::Error;

/// Errors produced while loading a vector drawable document
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input is not well-formed XML
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document root is not a `<vector>` element
    #[error("expected a <vector> root element, found <{found}>")]
    NotAVector { found: String },
}
