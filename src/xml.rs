//! Minimal owned XML tree built on `quick-xml` events.
//!
//! Doc-comment files are small and read whole, so the reader materializes
//! every element. Mixed content keeps its order: text and child elements
//! live side by side in [`XmlElement::children`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{Error, Result};

/// A node inside an element's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its attributes (document order) and content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    /// Direct child elements with the given tag.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |el| el.name == name)
    }

    /// First direct child element with the given tag.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|el| el.name == name)
    }

    /// All descendant elements with the given tag, depth first in document
    /// order. The element itself is included when it matches.
    pub fn descendants_named<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        collect_named(self, name, &mut found);
        found
    }

    /// Concatenated text of every descendant text node.
    pub fn text(&self) -> String {
        let mut out = String::new();
        push_text(self, &mut out);
        out
    }
}

fn collect_named<'a>(el: &'a XmlElement, name: &str, found: &mut Vec<&'a XmlElement>) {
    if el.name == name {
        found.push(el);
    }
    for child in el.elements() {
        collect_named(child, name, found);
    }
}

fn push_text(el: &XmlElement, out: &mut String) {
    for node in &el.children {
        match node {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(child) => push_text(child, out),
        }
    }
}

/// Parse XML text into its root element.
///
/// # Errors
///
/// Returns an error for malformed syntax, unbalanced tags, more than one
/// root element, or a document without any element.
pub fn parse(input: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);
    // Stray closing tags are reported by the tree builder with the tag name
    reader.config_mut().allow_unmatched_ends = true;

    let mut tree = TreeBuilder::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let el = start_element(&reader, &e)?;
                tree.open.push(el);
            }
            Event::Empty(e) => {
                let el = start_element(&reader, &e)?;
                tree.attach(el)?;
            }
            Event::End(e) => {
                let Some(el) = tree.open.pop() else {
                    let name = reader.decoder().decode(e.name().as_ref())?.into_owned();
                    return Err(Error::UnexpectedEnd(name));
                };
                tree.attach(el)?;
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?;
                tree.append_text(&text);
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?;
                tree.append_text(&decode_entity(&entity));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                tree.append_text(&text);
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some(open) = tree.open.pop() {
        return Err(Error::UnclosedElement(open.name));
    }
    tree.root.ok_or(Error::EmptyDocument)
}

#[derive(Default)]
struct TreeBuilder {
    open: Vec<XmlElement>,
    root: Option<XmlElement>,
}

impl TreeBuilder {
    /// Hand a finished element to its parent, or make it the root.
    fn attach(&mut self, el: XmlElement) -> Result<()> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(XmlNode::Element(el));
            return Ok(());
        }
        match &self.root {
            Some(first) => Err(Error::MultipleRoots {
                first: first.name.clone(),
                second: el.name,
            }),
            None => {
                self.root = Some(el);
                Ok(())
            }
        }
    }

    /// Text outside the root element (prolog whitespace) is dropped.
    fn append_text(&mut self, text: &str) {
        let Some(parent) = self.open.last_mut() else {
            return;
        };
        if let Some(XmlNode::Text(last)) = parent.children.last_mut() {
            last.push_str(text);
        } else {
            parent.children.push(XmlNode::Text(text.to_string()));
        }
    }
}

fn start_element(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<XmlElement> {
    let name = reader.decoder().decode(e.name().as_ref())?.into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Decode an entity reference (without `&` and `;`) to its text.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "amp" => "&".to_string(),
        "apos" => "'".to_string(),
        "quot" => "\"".to_string(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        // Unknown entity - preserve as-is
        _ => format!("&{entity};"),
    }
}
