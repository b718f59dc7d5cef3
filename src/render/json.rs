//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the extracted model directly, so custom pipelines can do
//! their own rendering.

use serde_json::json;

use crate::model::ClassEntity;
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, classes: &[ClassEntity]) -> String {
        let document = json!({ "classes": classes });
        format!("{document:#}\n")
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
