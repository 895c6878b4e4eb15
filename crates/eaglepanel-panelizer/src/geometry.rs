//! Board geometry extraction
//!
//! Finds the board extent from the straight segments on the dimension layer.

use crate::eagle::{is_curved_on_layer, is_on_layer, Segment, TAG_WIRE};
use crate::error::{PanelizeError, PanelizeResult};
use eaglepanel_core::{Bounds, Element};
use tracing::debug;

/// Extent and outline stroke width of a single board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// Bounding box of all dimension-layer segment endpoints
    pub bounds: Bounds,
    /// Widest dimension-layer stroke
    pub outline_width: f64,
}

/// Scan the outline area for dimension-layer wires
pub fn extract(plain: &Element, dimension_layer: &str) -> PanelizeResult<BoardGeometry> {
    let mut points = Vec::new();
    let mut outline_width: f64 = 0.0;

    for elem in &plain.children {
        if is_curved_on_layer(elem, dimension_layer) {
            return Err(PanelizeError::unsupported(
                &elem.tag,
                format!("curved outline primitive on layer {dimension_layer}"),
            ));
        }
        if !is_on_layer(elem, TAG_WIRE, dimension_layer) {
            continue;
        }
        let segment = Segment::from_wire(elem)?;
        points.push((segment.x1, segment.y1));
        points.push((segment.x2, segment.y2));
        outline_width = outline_width.max(segment.width);
    }

    let bounds = Bounds::from_points(points).ok_or_else(|| {
        PanelizeError::MissingDimension(format!("no wire on layer {dimension_layer}"))
    })?;
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(PanelizeError::MissingDimension(format!(
            "outline on layer {dimension_layer} has zero extent ({} x {})",
            bounds.width(),
            bounds.height()
        )));
    }

    debug!(
        "Board bounds: ({}, {}) - ({}, {}), outline width {}",
        bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y, outline_width
    );

    Ok(BoardGeometry {
        bounds,
        outline_width,
    })
}
