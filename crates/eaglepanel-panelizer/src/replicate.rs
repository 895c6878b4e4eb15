//! Element replication
//!
//! Copies a subtree into a grid cell. Each attribute is rewritten according to
//! a small closed rule table: identity attributes get a cell suffix,
//! coordinates are shifted by the cell offset, everything else is copied
//! verbatim.

use crate::eagle::{ATTRIBUTE_NAME, TAG_ATTRIBUTE, TAG_TEXT};
use crate::error::{PanelizeError, PanelizeResult};
use crate::grid::Grid;
use eaglepanel_core::{format_mm, parse_mm, Cell, Element};

/// How deep a replication goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Only the node itself
    Shallow,
    /// The node and all its descendants
    Deep,
}

/// Rewrite applied to a single attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRule {
    /// Append the cell suffix (`R1` -> `R1-1-0`)
    RenameWithSuffix,
    /// Shift by the cell's column offset
    OffsetX,
    /// Shift by the cell's row offset
    OffsetY,
    /// Copy unchanged
    Verbatim,
}

/// Attributes never carried from a label carrier onto a text label.
///
/// `name` is the carrier kind; the others are not valid on an EAGLE `<text>`.
const LABEL_EXCLUDED: [&str; 4] = ["name", "value", "display", "constant"];

impl AttributeRule {
    /// Rule for attribute `name` on a node tagged `tag`
    pub fn for_attribute(tag: &str, name: &str) -> Self {
        match name {
            // the carrier's `name` is the label kind, not a part identity
            "name" if tag == TAG_ATTRIBUTE => Self::Verbatim,
            "name" | "element" => Self::RenameWithSuffix,
            "x" | "x1" | "x2" => Self::OffsetX,
            "y" | "y1" | "y2" => Self::OffsetY,
            _ => Self::Verbatim,
        }
    }

    /// Apply this rule to `value`
    pub fn apply(self, value: &str, cell: Cell, offset: (f64, f64)) -> Option<String> {
        match self {
            Self::RenameWithSuffix => Some(format!("{value}{}", cell.suffix())),
            Self::OffsetX => shift(value, offset.0),
            Self::OffsetY => shift(value, offset.1),
            Self::Verbatim => Some(value.to_string()),
        }
    }
}

fn shift(value: &str, delta: f64) -> Option<String> {
    if delta == 0.0 {
        return Some(value.to_string());
    }
    parse_mm(value).map(|v| format_mm(v + delta))
}

/// Copy `source` into `cell`, rewriting attributes on every copied node
pub fn replicate(source: &Element, cell: Cell, grid: &Grid, depth: Depth) -> PanelizeResult<Element> {
    let offset = grid.offset(cell);
    copy_node(source, cell, offset, depth)
}

fn copy_node(
    source: &Element,
    cell: Cell,
    offset: (f64, f64),
    depth: Depth,
) -> PanelizeResult<Element> {
    let mut elem = Element::new(source.tag.clone());
    elem.text = source.text.clone();
    for (name, value) in &source.attributes {
        let rule = AttributeRule::for_attribute(&source.tag, name);
        let rewritten = rule
            .apply(value, cell, offset)
            .ok_or_else(|| PanelizeError::InvalidNumber {
                tag: source.tag.clone(),
                attribute: name.clone(),
                value: value.clone(),
            })?;
        elem.set_attr(name.clone(), rewritten);
    }
    if depth == Depth::Deep {
        elem.children = source
            .children
            .iter()
            .map(|child| copy_node(child, cell, offset, depth))
            .collect::<PanelizeResult<Vec<_>>>()?;
    }
    Ok(elem)
}

/// The label carrier of a placement: its `NAME` attribute, else its first attribute
pub fn label_carrier(placement: &Element) -> Option<&Element> {
    placement
        .children_named(TAG_ATTRIBUTE)
        .find(|a| a.attr("name") == Some(ATTRIBUTE_NAME))
        .or_else(|| placement.child(TAG_ATTRIBUTE))
}

/// Build the silkscreen text label for `placement` in `cell`.
///
/// The label shows the placement's source name at its carrier position,
/// shifted into the cell. Returns `None` when the placement has no carrier.
pub fn label_for(placement: &Element, cell: Cell, grid: &Grid) -> PanelizeResult<Option<Element>> {
    let Some(carrier) = label_carrier(placement) else {
        return Ok(None);
    };
    let offset = grid.offset(cell);

    let mut label = Element::new(TAG_TEXT);
    label.text = placement.attr("name").map(str::to_string);
    for (name, value) in &carrier.attributes {
        if LABEL_EXCLUDED.contains(&name.as_str()) {
            continue;
        }
        let rule = match AttributeRule::for_attribute(&carrier.tag, name) {
            rule @ (AttributeRule::OffsetX | AttributeRule::OffsetY) => rule,
            _ => AttributeRule::Verbatim,
        };
        let rewritten = rule
            .apply(value, cell, offset)
            .ok_or_else(|| PanelizeError::InvalidNumber {
                tag: carrier.tag.clone(),
                attribute: name.clone(),
                value: value.clone(),
            })?;
        label.set_attr(name.clone(), rewritten);
    }
    Ok(Some(label))
}
