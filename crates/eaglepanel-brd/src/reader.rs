//! `.brd` reader
//!
//! Converts a `roxmltree` parse into an owned [`Document`]. Comments and
//! processing instructions are dropped, as is whitespace-only text between
//! elements.

use crate::error::BrdResult;
use eaglepanel_core::{Document, Element};
use roxmltree::{Node, ParsingOptions};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const DOCTYPE_START: &str = "<!DOCTYPE";

/// Parse a board from XML text
pub fn read_str(text: &str) -> BrdResult<Document> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let xml = roxmltree::Document::parse_with_options(text, options)?;
    let root_node = xml.root_element();

    let doctype = doctype(&text[..root_node.range().start]);
    let root = convert(root_node);
    debug!(
        "Read <{}> document with {} nodes",
        root.tag,
        root.node_count()
    );

    Ok(Document { doctype, root })
}

/// Parse a board from any reader
pub fn read_from(mut reader: impl Read) -> BrdResult<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    read_str(&text)
}

/// Parse a board file from disk
pub fn read_file(path: impl AsRef<Path>) -> BrdResult<Document> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());
    read_from(File::open(path)?)
}

fn convert(node: Node) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attr in node.attributes() {
        element.set_attr(attr.name(), attr.value());
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            element.push(convert(child));
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }
    if !text.trim().is_empty() {
        element.text = Some(text);
    }
    element
}

/// Raw DOCTYPE declaration from the prolog, internal subset included
fn doctype(prolog: &str) -> Option<String> {
    let start = prolog.find(DOCTYPE_START)?;
    let rest = &prolog[start..];
    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '>' if depth == 0 => return Some(rest[..=i].to_string()),
            _ => {}
        }
    }
    None
}
