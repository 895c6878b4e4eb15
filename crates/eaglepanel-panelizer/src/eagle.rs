//! EAGLE board vocabulary: tag names, layers, and attribute helpers

use crate::error::{PanelizeError, PanelizeResult};
use eaglepanel_core::{parse_mm, Element};

/// Board outline layer
pub const LAYER_DIMENSION: &str = "20";
/// V-score layer
pub const LAYER_VSCORE: &str = "102";

pub const TAG_EAGLE: &str = "eagle";
pub const TAG_DRAWING: &str = "drawing";
pub const TAG_BOARD: &str = "board";
pub const TAG_PLAIN: &str = "plain";
pub const TAG_ELEMENTS: &str = "elements";
pub const TAG_SIGNALS: &str = "signals";
pub const TAG_ATTRIBUTE: &str = "attribute";
pub const TAG_WIRE: &str = "wire";
pub const TAG_HOLE: &str = "hole";
pub const TAG_TEXT: &str = "text";
pub const TAG_CIRCLE: &str = "circle";
pub const TAG_ARC: &str = "arc";

/// Attribute value of the label carrier holding a part's name position
pub const ATTRIBUTE_NAME: &str = "NAME";

/// Straight-line view of a `<wire>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
}

impl Segment {
    /// Read the endpoints and width of a wire, rejecting curved wires
    pub fn from_wire(wire: &Element) -> PanelizeResult<Self> {
        if let Some(curve) = optional_number(wire, "curve")? {
            if curve != 0.0 {
                return Err(PanelizeError::unsupported(
                    &wire.tag,
                    format!("curved wire (curve={curve}) on layer {}", layer_of(wire)),
                ));
            }
        }
        Ok(Self {
            x1: required_number(wire, "x1")?,
            y1: required_number(wire, "y1")?,
            x2: required_number(wire, "x2")?,
            y2: required_number(wire, "y2")?,
            width: optional_number(wire, "width")?.unwrap_or(0.0),
        })
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Whether `element` is a primitive of the given tag on the given layer
pub fn is_on_layer(element: &Element, tag: &str, layer: &str) -> bool {
    element.tag == tag && element.attr("layer") == Some(layer)
}

/// Whether `element` is a curved primitive on the given layer
pub fn is_curved_on_layer(element: &Element, layer: &str) -> bool {
    (element.tag == TAG_CIRCLE || element.tag == TAG_ARC) && element.attr("layer") == Some(layer)
}

fn layer_of(element: &Element) -> &str {
    element.attr("layer").unwrap_or("?")
}

/// Parse a numeric attribute that must be present
pub fn required_number(element: &Element, name: &str) -> PanelizeResult<f64> {
    optional_number(element, name)?.ok_or_else(|| PanelizeError::InvalidNumber {
        tag: element.tag.clone(),
        attribute: name.to_string(),
        value: String::new(),
    })
}

/// Parse a numeric attribute that may be absent
pub fn optional_number(element: &Element, name: &str) -> PanelizeResult<Option<f64>> {
    match element.attr(name) {
        None => Ok(None),
        Some(raw) => parse_mm(raw)
            .map(Some)
            .ok_or_else(|| PanelizeError::InvalidNumber {
                tag: element.tag.clone(),
                attribute: name.to_string(),
                value: raw.to_string(),
            }),
    }
}
