//! xmldoc — turn compiler-emitted XML documentation into Markdown and HTML.
//!
//! The pipeline has two pure stages:
//!
//! 1. [`extract::parse_documentation`] walks the `<member>` elements of a
//!    parsed doc-comment file and builds a list of [`ClassEntity`] values.
//! 2. A [`render::Renderer`] turns that list into text: plain Markdown,
//!    anchor-tag Markdown for hosts without heading anchors, HTML, or JSON.
//!
//! ```
//! use xmldoc::render::{MarkdownRenderer, Renderer};
//!
//! let xml = r#"<doc><members>
//!   <member name="T:App.Widgets.Button"><summary>A clickable button.</summary></member>
//!   <member name="M:App.Widgets.Button.Click"><summary>Fires the click event.</summary></member>
//! </members></doc>"#;
//!
//! let classes = xmldoc::parse_str(xml)?;
//! let markdown = MarkdownRenderer::plain().render(&classes);
//! assert!(markdown.contains("### Button.Click"));
//! # Ok::<(), xmldoc::Error>(())
//! ```

pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod toc;
pub mod xml;

pub use error::{Error, Result};
pub use model::{ClassEntity, MemberEntity, MemberKind, NamedEntry};

/// Parse doc-comment XML text and extract its documented types.
///
/// # Errors
///
/// Fails only when the text is not well-formed XML; extraction itself
/// skips incomplete entries instead of failing.
pub fn parse_str(xml: &str) -> Result<Vec<ClassEntity>> {
    let root = xml::parse(xml)?;
    Ok(extract::parse_documentation(&root))
}
