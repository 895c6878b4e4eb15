//! Generic document tree
//!
//! An ordered, attributed tree of named nodes with optional text content.
//! Attributes keep their insertion order so a document read from disk is
//! written back with the same attribute layout.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single node of the document tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Attributes in document order
    pub attributes: IndexMap<String, String>,
    /// Text content, if any
    pub text: Option<String>,
    /// Child nodes in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style text setter
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child node
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First child with the given tag
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// All children with the given tag
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Follow a path of tags from this element, taking the first match at each step
    pub fn find_path(&self, path: &[&str]) -> Option<&Element> {
        path.iter().try_fold(self, |node, tag| node.child(tag))
    }

    /// Copy of this element without its children
    pub fn shallow_clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            attributes: self.attributes.clone(),
            text: self.text.clone(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }
}

/// A parsed document: the root element plus prolog details needed to write it back
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Raw DOCTYPE declaration (e.g. `<!DOCTYPE eagle SYSTEM "eagle.dtd">`)
    pub doctype: Option<String>,
    /// Root element
    pub root: Element,
}

impl Document {
    /// Create a document around a root element
    pub fn new(root: Element) -> Self {
        Self {
            doctype: None,
            root,
        }
    }

    /// Builder-style DOCTYPE setter
    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Self {
        self.doctype = Some(doctype.into());
        self
    }
}
