//! Extractor: doc-comment `<member>` elements → [`ClassEntity`] list.
//!
//! Types are the `T:` members. A type's members are found by plain textual
//! prefix (`M:Full.Type.`, `P:Full.Type.`, `F:Full.Type.`), the same way the
//! compiler output is usually consumed. Nested and generic type names can
//! therefore over- or under-match; that is accepted here.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::model::{upsert_entry, ClassEntity, MemberEntity, MemberKind};
use crate::xml::{XmlElement, XmlNode};

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Member kinds that attach to a type.
const MEMBER_PREFIXES: [&str; 3] = ["M:", "P:", "F:"];

/// Extract every documented type from a parsed doc-comment tree.
///
/// Never fails: entries without a `name`, or types whose name is empty,
/// are skipped.
pub fn parse_documentation(root: &XmlElement) -> Vec<ClassEntity> {
    let members: Vec<(&str, &XmlElement)> = root
        .descendants_named("member")
        .into_iter()
        .filter_map(|el| match el.attribute("name") {
            Some(name) => Some((name, el)),
            None => {
                debug!("skipping <member> without a name attribute");
                None
            }
        })
        .collect();

    let mut classes = Vec::new();
    for (name, type_el) in &members {
        let Some(full_name) = name.strip_prefix("T:") else {
            continue;
        };
        if full_name.is_empty() {
            debug!("skipping type entry with an empty name");
            continue;
        }

        let (namespace, class_name) = split_type_name(full_name);
        let mut class = ClassEntity {
            class_name: class_name.to_string(),
            namespace: namespace.to_string(),
            summary: element_text(type_el, "summary"),
            remarks: element_text(type_el, "remarks"),
            members: Vec::new(),
        };

        let prefixes = MEMBER_PREFIXES.map(|kind| format!("{kind}{full_name}."));
        for (member_name, member_el) in &members {
            if prefixes.iter().any(|p| member_name.starts_with(p.as_str())) {
                class.members.push(parse_member(member_name, member_el));
            }
        }

        trace!(
            class = %full_name,
            members = class.members.len(),
            "extracted type"
        );
        classes.push(class);
    }
    classes
}

/// Split `A.B.C` into (`A.B`, `C`); a single segment has an empty namespace.
pub fn split_type_name(full_name: &str) -> (&str, &str) {
    full_name.rsplit_once('.').unwrap_or(("", full_name))
}

fn parse_member(name: &str, el: &XmlElement) -> MemberEntity {
    let kind = name.chars().next().map_or(MemberKind::Unknown, MemberKind::from_prefix);

    let mut member = MemberEntity {
        kind,
        name: name.to_string(),
        summary: element_text(el, "summary"),
        remarks: element_text(el, "remarks"),
        returns: element_text(el, "returns"),
        value: element_text(el, "value"),
        permission: element_text(el, "permission"),
        overloads: element_text(el, "overloads"),
        inherit_doc: el.child("inheritdoc").is_some(),
        ..Default::default()
    };

    for param in el.children_named("param") {
        if let Some(key) = param.attribute("name") {
            upsert_entry(&mut member.parameters, key.to_string(), inline_clean(param));
        }
    }
    for type_param in el.children_named("typeparam") {
        if let Some(key) = type_param.attribute("name") {
            upsert_entry(&mut member.type_parameters, key.to_string(), inline_clean(type_param));
        }
    }
    for exception in el.children_named("exception") {
        if let Some(cref) = exception.attribute("cref") {
            upsert_entry(&mut member.exceptions, cref.to_string(), inline_clean(exception));
        }
    }
    member.see_also = el
        .children_named("seealso")
        .filter_map(|see| see.attribute("cref"))
        .map(clean_whitespace)
        .collect();
    member.examples = el.children_named("example").map(inline_clean).collect();
    member.lists = el.children_named("list").map(render_list).collect();

    member
}

/// Inline text of the first child with `tag`, cleaned; empty when absent.
fn element_text(parent: &XmlElement, tag: &str) -> String {
    parent.child(tag).map(inline_clean).unwrap_or_default()
}

fn inline_clean(el: &XmlElement) -> String {
    clean_whitespace(&render_inline_text(el))
}

/// One line per `<list>`: its `listheader`/`item` entries joined with `; `,
/// each as `term: description` when both are given.
///
/// A list without entries falls back to its own inline text.
fn render_list(list: &XmlElement) -> String {
    let entries: Vec<String> = list
        .elements()
        .filter(|child| child.name == "listheader" || child.name == "item")
        .map(render_list_entry)
        .filter(|entry| !entry.is_empty())
        .collect();
    if entries.is_empty() {
        return inline_clean(list);
    }
    entries.join("; ")
}

fn render_list_entry(item: &XmlElement) -> String {
    let term = element_text(item, "term");
    let description = element_text(item, "description");
    match (term.is_empty(), description.is_empty()) {
        (false, false) => format!("{term}: {description}"),
        (false, true) => term,
        (true, false) => description,
        (true, true) => inline_clean(item),
    }
}

/// Flatten an element's content to a single string.
///
/// Text passes through; `paramref`/`typeparamref` become `` `name` ``,
/// `see` becomes `See <cref>` (or `` `langword` ``), `c` is wrapped in
/// backticks and `code` contributes its text. Other elements are dropped.
pub fn render_inline_text(el: &XmlElement) -> String {
    let mut out = String::new();
    for node in &el.children {
        match node {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(child) => match child.name.as_str() {
                "paramref" | "typeparamref" => {
                    if let Some(name) = child.attribute("name") {
                        out.push('`');
                        out.push_str(name);
                        out.push('`');
                    }
                }
                "see" => {
                    if let Some(cref) = child.attribute("cref") {
                        out.push_str("See ");
                        out.push_str(cref);
                    } else if let Some(word) = child.attribute("langword") {
                        out.push('`');
                        out.push_str(word);
                        out.push('`');
                    }
                }
                "c" => {
                    out.push('`');
                    out.push_str(&child.text());
                    out.push('`');
                }
                "code" => out.push_str(&child.text()),
                _ => {}
            },
        }
    }
    out
}

/// Collapse whitespace runs (newlines included) to one space and trim.
pub fn clean_whitespace(input: &str) -> String {
    RE_WHITESPACE.replace_all(input, " ").trim().to_string()
}
