//! HTML renderer — standalone page with a namespace sidebar.
//!
//! Element ids come from [`toc::html_anchor`], not the Markdown anchor.
//! The page links `styles.css`, which the caller places next to it.

use crate::model::{strip_kind_prefix, ClassEntity, MemberEntity, NamedEntry};
use crate::render::Renderer;
use crate::toc::{self, NamespaceNode};

/// Member titles longer than this get break opportunities.
const LONG_NAME_THRESHOLD: usize = 75;

const ZERO_WIDTH_SPACE: &str = "&#8203;";

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, classes: &[ClassEntity]) -> String {
        let mut out = String::new();
        let namespaces = toc::group_by_namespace(classes);

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        out.push_str("<title>Documentation</title>\n");
        out.push_str("<link rel=\"stylesheet\" href=\"styles.css\">\n");
        out.push_str("</head>\n<body>\n");

        // Sidebar
        out.push_str("<div class=\"sidebar\">\n<h2>Table of Contents</h2>\n<ul>\n");
        let tree = toc::build_namespace_tree(namespaces.keys().copied());
        for node in &tree {
            render_namespace_node(&mut out, node);
        }
        out.push_str("</ul>\n</div>\n");

        // Content
        out.push_str("<div class=\"content\">\n");
        for (namespace, ns_classes) in &namespaces {
            out.push_str(&format!(
                "<h2 id=\"{}\">{}</h2>\n",
                html_escape(&toc::html_anchor(namespace)),
                html_escape(namespace)
            ));
            out.push_str("<ul>\n");
            for class in ns_classes {
                out.push_str(&format!(
                    "<li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&toc::html_anchor(&class.class_name)),
                    html_escape(&class.class_name)
                ));
            }
            out.push_str("</ul>\n");

            for class in ns_classes {
                out.push_str(&render_class_html(class));
            }
        }
        out.push_str("</div>\n");

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_namespace_node(out: &mut String, node: &NamespaceNode) {
    out.push_str(&format!(
        "<li><a href=\"#{}\">{}</a>",
        html_escape(&toc::html_anchor(&node.full_name)),
        html_escape(&node.name)
    ));
    if !node.children.is_empty() {
        out.push_str("\n<ul>\n");
        for child in &node.children {
            render_namespace_node(out, child);
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</li>\n");
}

fn render_class_html(class: &ClassEntity) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<h3 id=\"{}\">{}</h3>\n",
        html_escape(&toc::html_anchor(&class.class_name)),
        html_escape(&class.class_name)
    ));
    out.push_str(&format!(
        "<p><strong>Namespace:</strong> {}</p>\n",
        html_escape(&class.namespace)
    ));
    push_paragraph(&mut out, "Summary", &class.summary);
    push_paragraph(&mut out, "Remarks", &class.remarks);

    if !class.members.is_empty() {
        out.push_str("<h4>Members</h4>\n<table>\n");
        out.push_str("<tr><th>Name</th><th>Summary</th></tr>\n");
        for member in &class.members {
            let title = member.title(&class.namespace);
            out.push_str(&format!(
                "<tr><td><a href=\"#{}\">{}</a></td><td>{}</td></tr>\n",
                html_escape(&toc::html_anchor(&title)),
                link_text(&title, &member.name),
                html_escape(&member.summary)
            ));
        }
        out.push_str("</table>\n");
    }

    for member in &class.members {
        out.push_str(&render_member_html(member, &class.namespace));
    }

    out.push_str("<hr>\n");
    out
}

fn render_member_html(member: &MemberEntity, namespace: &str) -> String {
    let mut out = String::new();
    let title = member.title(namespace);

    out.push_str(&format!(
        "<h4 id=\"{}\">{}</h4>\n",
        html_escape(&toc::html_anchor(&title)),
        html_escape(&title)
    ));
    push_paragraph(&mut out, "Summary", &member.summary);
    push_paragraph(&mut out, "Remarks", &member.remarks);

    if member.inherit_doc {
        out.push_str("<p><em>Inherits documentation from the base member.</em></p>\n");
    }

    push_entry_list(&mut out, "Parameters", &member.parameters);
    push_entry_list(&mut out, "Type Parameters", &member.type_parameters);
    push_entry_list(&mut out, "Exceptions", &member.exceptions);

    push_paragraph(&mut out, "Returns", &member.returns);
    push_paragraph(&mut out, "Value", &member.value);
    push_paragraph(&mut out, "Permission", &member.permission);
    push_paragraph(&mut out, "Overloads", &member.overloads);

    if !member.see_also.is_empty() {
        out.push_str("<p><strong>See Also:</strong></p>\n<ul>\n");
        for see in &member.see_also {
            out.push_str(&format!("<li>{}</li>\n", html_escape(strip_kind_prefix(see))));
        }
        out.push_str("</ul>\n");
    }

    if !member.examples.is_empty() {
        out.push_str("<p><strong>Examples:</strong></p>\n");
        for example in &member.examples {
            out.push_str(&format!("<pre><code>{}</code></pre>\n", html_escape(example)));
        }
    }

    if !member.lists.is_empty() {
        out.push_str("<p><strong>Lists:</strong></p>\n<ul>\n");
        for list in &member.lists {
            out.push_str(&format!("<li>{}</li>\n", html_escape(list)));
        }
        out.push_str("</ul>\n");
    }

    out
}

fn push_paragraph(out: &mut String, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(&format!("<p><strong>{label}:</strong> {}</p>\n", html_escape(text)));
}

fn push_entry_list(out: &mut String, label: &str, entries: &[NamedEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("<p><strong>{label}:</strong></p>\n<ul>\n"));
    for entry in entries {
        out.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>\n",
            html_escape(&entry.name),
            html_escape(&entry.description)
        ));
    }
    out.push_str("</ul>\n");
}

/// Escaped members-table link text. When the member's full name (kind
/// prefix dropped) is long, a zero-width space goes before each `(` and `{`
/// so the browser can wrap inside signatures.
fn link_text(title: &str, member_name: &str) -> String {
    let escaped = html_escape(title);
    if strip_kind_prefix(member_name).chars().count() > LONG_NAME_THRESHOLD {
        insert_break_opportunities(&escaped)
    } else {
        escaped
    }
}

fn insert_break_opportunities(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        if c == '(' || c == '{' {
            out.push_str(ZERO_WIDTH_SPACE);
        }
        out.push(c);
    }
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
