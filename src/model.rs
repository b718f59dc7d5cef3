//! Data model for extracted documentation — format-agnostic.
//!
//! Produced once by [`crate::extract`] and only read afterwards by the
//! renderers.

use serde::Serialize;

/// One documented type (`T:` entry) and the members matched to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassEntity {
    /// Last dotted segment of the type name
    pub class_name: String,
    /// Preceding segments joined with `.`, empty when there are none
    pub namespace: String,
    pub summary: String,
    pub remarks: String,
    /// Members in document order
    pub members: Vec<MemberEntity>,
}

impl ClassEntity {
    /// Fully qualified type name, i.e. the inverse of the namespace split.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.class_name.clone()
        } else {
            format!("{}.{}", self.namespace, self.class_name)
        }
    }
}

/// Classification of a documented member, taken from its name prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MemberKind {
    Method,
    Property,
    Field,
    #[default]
    Unknown,
}

impl MemberKind {
    /// `M` → Method, `P` → Property, `F` → Field, anything else → Unknown.
    pub fn from_prefix(prefix: char) -> Self {
        match prefix {
            'M' => Self::Method,
            'P' => Self::Property,
            'F' => Self::Field,
            _ => Self::Unknown,
        }
    }
}

/// A single documented method, property or field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberEntity {
    pub kind: MemberKind,
    /// Raw identifier including the kind prefix, e.g. `M:Ns.Type.Run(System.Int32)`
    pub name: String,
    pub summary: String,
    pub remarks: String,
    pub returns: String,
    pub value: String,
    pub permission: String,
    pub overloads: String,
    /// `<inheritdoc/>` present
    pub inherit_doc: bool,
    /// `<param name>` entries
    pub parameters: Vec<NamedEntry>,
    /// `<typeparam name>` entries
    pub type_parameters: Vec<NamedEntry>,
    /// `<exception cref>` entries keyed by the raw cref
    pub exceptions: Vec<NamedEntry>,
    /// Raw `<seealso cref>` targets
    pub see_also: Vec<String>,
    pub examples: Vec<String>,
    pub lists: Vec<String>,
}

impl MemberEntity {
    /// Display name used for headings, table rows and anchors.
    ///
    /// The kind prefix is dropped, and so is the owning namespace when the
    /// member name starts with it: `M:App.Widgets.Button.Click` inside
    /// `App.Widgets` becomes `Button.Click`.
    pub fn title(&self, namespace: &str) -> String {
        let name = strip_kind_prefix(&self.name);
        if namespace.is_empty() {
            return name.to_string();
        }
        name.strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix('.'))
            .filter(|rest| !rest.is_empty())
            .unwrap_or(name)
            .to_string()
    }
}

/// Name → description pair from `param`, `typeparam` or `exception`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamedEntry {
    pub name: String,
    pub description: String,
}

/// Insert or replace an entry, keeping first-insertion order.
///
/// Names are unique per member; a repeated name overwrites the earlier
/// description in place.
pub fn upsert_entry(entries: &mut Vec<NamedEntry>, name: String, description: String) {
    match entries.iter_mut().find(|e| e.name == name) {
        Some(existing) => existing.description = description,
        None => entries.push(NamedEntry { name, description }),
    }
}

/// Drop a leading `X:` kind prefix (`T:`, `M:`, `P:`, `F:`, `E:`, `N:`, `!:`).
///
/// Strings without such a prefix are returned unchanged.
pub fn strip_kind_prefix(name: &str) -> &str {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(kind), Some(':')) if kind.is_ascii_alphabetic() || kind == '!' => &name[2..],
        _ => name,
    }
}
