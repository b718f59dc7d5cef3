//! Namespace grouping, anchor generation and the nested namespace tree.
//!
//! Shared by every renderer. Markdown output links with [`anchor`], HTML
//! output with [`html_anchor`]; the two transforms are deliberately different
//! and must not be swapped.

use std::collections::BTreeMap;

use crate::model::ClassEntity;

/// Classes grouped by namespace.
///
/// Keys iterate in lexicographic order; classes keep first-seen order.
pub fn group_by_namespace(classes: &[ClassEntity]) -> BTreeMap<&str, Vec<&ClassEntity>> {
    let mut namespaces: BTreeMap<&str, Vec<&ClassEntity>> = BTreeMap::new();
    for class in classes {
        namespaces.entry(class.namespace.as_str()).or_default().push(class);
    }
    namespaces
}

/// Markdown heading anchor.
///
/// - lowercase
/// - drop every char that is not alphanumeric or `_`
/// - trim
pub fn anchor(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }
    slug.trim().to_string()
}

/// HTML element id: dots become hyphens, nothing else changes.
pub fn html_anchor(text: &str) -> String {
    text.replace('.', "-")
}

/// A Markdown list item linking to a heading: `- [text](#anchor)`.
pub fn render_toc_item(text: &str) -> String {
    format!("- [{}](#{})", text, anchor(text))
}

/// Node in the nested namespace tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceNode {
    /// Last segment, e.g. `B` for `App.B`
    pub name: String,
    /// Full dotted prefix, e.g. `App.B`
    pub full_name: String,
    pub children: Vec<NamespaceNode>,
}

/// Build the namespace forest from namespace names.
///
/// Each namespace is walked segment by segment; a node is created for
/// every prefix not seen yet and reused otherwise, so `App.B` hangs under
/// `App` exactly once no matter how many classes share it. Input is
/// expected in sorted order; sibling order follows input order.
pub fn build_namespace_tree<'a>(namespaces: impl IntoIterator<Item = &'a str>) -> Vec<NamespaceNode> {
    let mut roots: Vec<NamespaceNode> = Vec::new();

    for ns in namespaces {
        let mut level = &mut roots;
        let mut full_name = String::new();
        for (i, part) in ns.split('.').enumerate() {
            if i > 0 {
                full_name.push('.');
            }
            full_name.push_str(part);

            let pos = match level.iter().position(|n| n.name == part) {
                Some(pos) => pos,
                None => {
                    level.push(NamespaceNode {
                        name: part.to_string(),
                        full_name: full_name.clone(),
                        children: Vec::new(),
                    });
                    level.len() - 1
                }
            };
            level = &mut level[pos].children;
        }
    }

    roots
}

/// Depth-first walk of the forest, yielding `(depth, node)` pairs.
pub fn flatten_tree(nodes: &[NamespaceNode]) -> Vec<(usize, &NamespaceNode)> {
    fn walk<'a>(nodes: &'a [NamespaceNode], depth: usize, out: &mut Vec<(usize, &'a NamespaceNode)>) {
        for node in nodes {
            out.push((depth, node));
            walk(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(nodes, 0, &mut out);
    out
}
