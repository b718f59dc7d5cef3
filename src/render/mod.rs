//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::{AnchorTagHeadings, HeadingStyle, MarkdownRenderer, PlainHeadings};

use crate::error::{Error, Result};
use crate::model::ClassEntity;

/// Trait for rendering extracted classes into a specific output format.
pub trait Renderer: Send + Sync {
    fn render(&self, classes: &[ClassEntity]) -> String;
    fn file_extension(&self) -> &str;
    /// File stem used when all inputs are written to a single document.
    fn default_file_stem(&self) -> &str {
        "documentation"
    }
}

/// Create a renderer for the given format name.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] for names other than `markdown`/`md`,
/// `bitbucket`/`anchor-markdown`, `html` and `json`.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(MarkdownRenderer::plain())),
        "bitbucket" | "anchor-markdown" => Ok(Box::new(MarkdownRenderer::bitbucket())),
        "html" => Ok(Box::new(HtmlRenderer)),
        "json" => Ok(Box::new(JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
