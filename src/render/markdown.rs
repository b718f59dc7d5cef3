//! Markdown renderer, with plain or anchor-tag headings.
//!
//! One traversal serves both variants. The only difference is how a heading
//! line is written, which is delegated to a [`HeadingStyle`]:
//!
//! - [`PlainHeadings`]: `## Text`, relying on the host to generate anchors
//! - [`AnchorTagHeadings`]: `<a name="text"></a>` followed by `## Text`, for
//!   hosts such as Bitbucket that do not generate heading anchors

use crate::model::{strip_kind_prefix, ClassEntity, MemberEntity, NamedEntry};
use crate::render::Renderer;
use crate::toc;

/// Writes a single heading (and anything that must precede it).
pub trait HeadingStyle: Send + Sync {
    fn heading(&self, out: &mut String, text: &str, level: usize);
}

/// `#`-style headings only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHeadings;

impl HeadingStyle for PlainHeadings {
    fn heading(&self, out: &mut String, text: &str, level: usize) {
        push_heading_line(out, text, level);
    }
}

/// Raw `<a name>` anchor line before every heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorTagHeadings;

impl HeadingStyle for AnchorTagHeadings {
    fn heading(&self, out: &mut String, text: &str, level: usize) {
        out.push_str(&format!("<a name=\"{}\"></a>\n", toc::anchor(text)));
        push_heading_line(out, text, level);
    }
}

fn push_heading_line(out: &mut String, text: &str, level: usize) {
    out.push_str(&"#".repeat(level));
    out.push(' ');
    out.push_str(text);
    out.push('\n');
}

/// Markdown renderer parameterized by its heading style.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer<H = PlainHeadings> {
    headings: H,
    file_stem: &'static str,
}

impl MarkdownRenderer<PlainHeadings> {
    /// Markdown for hosts that generate heading anchors themselves.
    pub fn plain() -> Self {
        Self::with_headings(PlainHeadings, "documentation")
    }
}

impl Default for MarkdownRenderer<PlainHeadings> {
    fn default() -> Self {
        Self::plain()
    }
}

impl MarkdownRenderer<AnchorTagHeadings> {
    /// Markdown with explicit `<a name>` anchors (Bitbucket and similar).
    pub fn bitbucket() -> Self {
        Self::with_headings(AnchorTagHeadings, "BitbucketDocumentation")
    }
}

impl<H: HeadingStyle> MarkdownRenderer<H> {
    pub fn with_headings(headings: H, file_stem: &'static str) -> Self {
        Self { headings, file_stem }
    }

    fn heading(&self, out: &mut String, text: &str, level: usize) {
        self.headings.heading(out, text, level);
        out.push('\n');
    }

    fn render_namespace(&self, out: &mut String, namespace: &str, classes: &[&ClassEntity]) {
        self.heading(out, namespace, 1);

        self.heading(out, "Table of Contents", 2);
        for class in classes {
            out.push_str(&toc::render_toc_item(&class.class_name));
            out.push('\n');
        }
        out.push('\n');

        for class in classes {
            self.render_class(out, class);
        }
    }

    fn render_class(&self, out: &mut String, class: &ClassEntity) {
        self.heading(out, &class.class_name, 2);
        out.push_str(&format!("**Namespace:** {}\n\n", class.namespace));
        push_labeled(out, "Summary", &class.summary);
        push_labeled(out, "Remarks", &class.remarks);

        if !class.members.is_empty() {
            self.heading(out, "Members", 3);
            out.push_str("| Name | Summary |\n");
            out.push_str("| --- | --- |\n");
            for member in &class.members {
                let title = member.title(&class.namespace);
                out.push_str(&format!(
                    "| [{}](#{}) | {} |\n",
                    escape_cell(&title),
                    toc::anchor(&title),
                    escape_cell(&member.summary)
                ));
            }
            out.push('\n');
        }

        for member in &class.members {
            self.render_member(out, member, &class.namespace);
        }

        out.push_str("---\n\n");
    }

    fn render_member(&self, out: &mut String, member: &MemberEntity, namespace: &str) {
        self.heading(out, &member.title(namespace), 3);

        push_labeled(out, "Summary", &member.summary);
        push_labeled(out, "Remarks", &member.remarks);

        if member.inherit_doc {
            out.push_str("_Inherits documentation from the base member._\n\n");
        }

        push_entries(out, "Parameters", &member.parameters);
        push_entries(out, "Type Parameters", &member.type_parameters);
        push_entries(out, "Exceptions", &member.exceptions);

        push_labeled(out, "Returns", &member.returns);
        push_labeled(out, "Value", &member.value);
        push_labeled(out, "Permission", &member.permission);
        push_labeled(out, "Overloads", &member.overloads);

        if !member.see_also.is_empty() {
            out.push_str("**See Also:**\n");
            for see in &member.see_also {
                out.push_str(&format!("- {}\n", strip_kind_prefix(see)));
            }
            out.push('\n');
        }

        if !member.examples.is_empty() {
            out.push_str("**Examples:**\n");
            for example in &member.examples {
                out.push_str("```\n");
                out.push_str(example);
                out.push_str("\n```\n");
            }
            out.push('\n');
        }

        if !member.lists.is_empty() {
            out.push_str("**Lists:**\n");
            for list in &member.lists {
                out.push_str(&format!("- {list}\n"));
            }
            out.push('\n');
        }
    }
}

impl<H: HeadingStyle> Renderer for MarkdownRenderer<H> {
    fn render(&self, classes: &[ClassEntity]) -> String {
        let mut out = String::new();
        let namespaces = toc::group_by_namespace(classes);

        self.heading(&mut out, "Table of Contents", 1);
        let tree = toc::build_namespace_tree(namespaces.keys().copied());
        for (depth, node) in toc::flatten_tree(&tree) {
            out.push_str(&"  ".repeat(depth));
            out.push_str(&toc::render_toc_item(&node.full_name));
            out.push('\n');
        }
        out.push('\n');

        for (namespace, classes) in &namespaces {
            self.render_namespace(&mut out, namespace, classes);
        }

        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }

    fn default_file_stem(&self) -> &str {
        self.file_stem
    }
}

/// `**Label:**` followed by the text; nothing at all when the text is empty.
fn push_labeled(out: &mut String, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(&format!("**{label}:**\n{text}\n\n"));
}

fn push_entries(out: &mut String, label: &str, entries: &[NamedEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("**{label}:**\n"));
    for entry in entries {
        out.push_str(&format!("- **{}:** {}\n", entry.name, entry.description));
    }
    out.push('\n');
}

/// Pipes would split a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MemberKind, NamedEntry};
    use pretty_assertions::assert_eq;

    fn button() -> ClassEntity {
        ClassEntity {
            class_name: "Button".into(),
            namespace: "App.Widgets".into(),
            summary: "A clickable button.".into(),
            remarks: String::new(),
            members: vec![MemberEntity {
                kind: MemberKind::Method,
                name: "M:App.Widgets.Button.Click".into(),
                summary: "Fires the click event.".into(),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn full_document_layout() {
        let out = MarkdownRenderer::plain().render(&[button()]);
        let expected = "\
# Table of Contents

- [App](#app)
  - [App.Widgets](#appwidgets)

# App.Widgets

## Table of Contents

- [Button](#button)

## Button

**Namespace:** App.Widgets

**Summary:**
A clickable button.

### Members

| Name | Summary |
| --- | --- |
| [Button.Click](#buttonclick) | Fires the click event. |

### Button.Click

**Summary:**
Fires the click event.

---

";
        assert_eq!(out, expected);
    }

    #[test]
    fn empty_fields_print_no_label() {
        let out = MarkdownRenderer::plain().render(&[button()]);
        assert!(!out.contains("**Remarks:**"));
        assert!(!out.contains("**Returns:**"));
        assert!(!out.contains("**Parameters:**"));
    }

    #[test]
    fn class_without_members_has_no_table() {
        let class = ClassEntity {
            members: Vec::new(),
            ..button()
        };
        let out = MarkdownRenderer::plain().render(&[class]);
        assert!(!out.contains("### Members"));
        assert!(!out.contains("| Name | Summary |"));
    }

    #[test]
    fn member_sections() {
        let mut class = button();
        class.members[0] = MemberEntity {
            kind: MemberKind::Method,
            name: "M:App.Widgets.Button.Move(System.Int32,System.Int32)".into(),
            parameters: vec![
                NamedEntry { name: "x".into(), description: "first".into() },
                NamedEntry { name: "y".into(), description: "second".into() },
            ],
            exceptions: vec![NamedEntry {
                name: "T:System.ArgumentException".into(),
                description: "Bad input.".into(),
            }],
            returns: "Nothing.".into(),
            see_also: vec!["M:Other.Method".into(), "T:Other.Type".into()],
            examples: vec!["button.Move(1, 2);".into()],
            inherit_doc: true,
            ..Default::default()
        };
        let out = MarkdownRenderer::plain().render(&[class]);
        assert!(out.contains("**Parameters:**\n- **x:** first\n- **y:** second\n\n"));
        assert!(out.contains("**Exceptions:**\n- **T:System.ArgumentException:** Bad input.\n"));
        assert!(out.contains("**Returns:**\nNothing.\n"));
        assert!(out.contains("**See Also:**\n- Other.Method\n- Other.Type\n"));
        assert!(!out.contains("- M:Other.Method"));
        assert!(out.contains("**Examples:**\n```\nbutton.Move(1, 2);\n```\n"));
        assert!(out.contains("_Inherits documentation from the base member._"));
    }

    #[test]
    fn anchor_tags_precede_every_heading() {
        let out = MarkdownRenderer::bitbucket().render(&[button()]);
        assert!(out.starts_with("<a name=\"tableofcontents\"></a>\n# Table of Contents\n\n"));
        assert!(out.contains("<a name=\"appwidgets\"></a>\n# App.Widgets\n"));
        assert!(out.contains("<a name=\"button\"></a>\n## Button\n"));
        assert!(out.contains("<a name=\"buttonclick\"></a>\n### Button.Click\n"));

        let headings = out.lines().filter(|l| l.starts_with('#')).count();
        let anchors = out.lines().filter(|l| l.starts_with("<a name=")).count();
        assert_eq!(headings, anchors);
    }

    #[test]
    fn variants_differ_only_in_anchor_lines() {
        let plain = MarkdownRenderer::plain().render(&[button()]);
        let tagged = MarkdownRenderer::bitbucket().render(&[button()]);
        let stripped: String = tagged
            .lines()
            .filter(|l| !l.starts_with("<a name="))
            .map(|l| format!("{l}\n"))
            .collect();
        assert_eq!(stripped, plain);
    }

    #[test]
    fn table_cells_escape_pipes() {
        let mut class = button();
        class.members[0].summary = "a | b".into();
        let out = MarkdownRenderer::plain().render(&[class]);
        assert!(out.contains("| a \\| b |"));
    }
}
