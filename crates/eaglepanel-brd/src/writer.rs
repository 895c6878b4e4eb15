//! `.brd` writer
//!
//! Pretty-prints a [`Document`] with two-space indentation. Elements without
//! children or text are self-closed; text is written inline.

use crate::error::BrdResult;
use eaglepanel_core::{Document, Element};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// XML declaration written at the top of every file
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const INDENT: &str = "  ";

/// Serialize a document to XML text
pub fn write_string(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    if let Some(doctype) = &doc.doctype {
        out.push_str(doctype);
        out.push('\n');
    }
    write_element(&mut out, &doc.root, 0);
    out
}

/// Serialize a document into any writer
pub fn write_to(doc: &Document, mut writer: impl Write) -> BrdResult<()> {
    writer.write_all(write_string(doc).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a document to a file, replacing it if it exists
pub fn write_file(doc: &Document, path: impl AsRef<Path>) -> BrdResult<()> {
    let path = path.as_ref();
    debug!("Writing {}", path.display());
    write_to(doc, BufWriter::new(File::create(path)?))
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    push_indent(out, depth);
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(out, value, true);
        out.push('"');
    }

    match (&element.text, element.children.is_empty()) {
        (None, true) => out.push_str("/>\n"),
        (Some(text), true) => {
            out.push('>');
            escape_into(out, text, false);
            close_tag(out, &element.tag);
        }
        (text, false) => {
            out.push('>');
            if let Some(text) = text {
                escape_into(out, text, false);
            }
            out.push('\n');
            for child in &element.children {
                write_element(out, child, depth + 1);
            }
            push_indent(out, depth);
            close_tag(out, &element.tag);
        }
    }
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn escape_into(out: &mut String, value: &str, attribute: bool) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            // attribute-value normalization would turn these into spaces
            '\n' if attribute => out.push_str("&#10;"),
            '\r' if attribute => out.push_str("&#13;"),
            '\t' if attribute => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
}
