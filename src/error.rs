//! Error types for reading documentation XML and selecting renderers.

/// Errors surfaced by the library.
///
/// Extraction and rendering are total; only the XML reader and renderer
/// lookup can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// XML syntax error reported by the reader.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    /// Malformed attribute on an element.
    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Input bytes could not be decoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Document ended while an element was still open.
    #[error("unclosed element <{0}>")]
    UnclosedElement(String),

    /// Closing tag without a matching opening tag.
    #[error("unexpected closing tag </{0}>")]
    UnexpectedEnd(String),

    /// More than one top-level element.
    #[error("multiple root elements: <{first}> and <{second}>")]
    MultipleRoots { first: String, second: String },

    /// No element at all.
    #[error("document has no root element")]
    EmptyDocument,

    /// Renderer lookup with an unsupported name.
    #[error("unknown format: {0}. Use markdown, bitbucket, html, or json")]
    UnknownFormat(String),
}

/// Result alias for library operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
