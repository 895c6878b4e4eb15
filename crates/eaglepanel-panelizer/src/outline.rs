//! Panel outline and mounting hole synthesis

use crate::config::PanelConfig;
use crate::eagle::TAG_HOLE;
use crate::grid::Grid;
use crate::score::line;
use eaglepanel_core::{format_mm, Element};

/// Four dimension-layer wires around the panel: bottom, right, top, left
pub fn panel_outline(grid: &Grid, layer: &str, width: f64) -> Vec<Element> {
    let p = grid.panel;
    vec![
        line(layer, (p.min_x, p.min_y), (p.max_x, p.min_y), width),
        line(layer, (p.max_x, p.min_y), (p.max_x, p.max_y), width),
        line(layer, (p.max_x, p.max_y), (p.min_x, p.max_y), width),
        line(layer, (p.min_x, p.max_y), (p.min_x, p.min_y), width),
    ]
}

/// Corner mounting holes, or nothing when holes are disabled
pub fn corner_holes(grid: &Grid, config: &PanelConfig) -> Vec<Element> {
    if !config.holes_enabled() {
        return Vec::new();
    }
    let p = grid.panel;
    let left = p.min_x + config.hole_offset_x;
    let right = p.max_x - config.hole_offset_x;
    let bottom = p.min_y + config.hole_offset_y;
    let top = p.max_y - config.hole_offset_y;

    [(left, bottom), (right, bottom), (left, top), (right, top)]
        .into_iter()
        .map(|(x, y)| {
            Element::new(TAG_HOLE)
                .with_attr("x", format_mm(x))
                .with_attr("y", format_mm(y))
                .with_attr("drill", format_mm(config.drill_diameter))
        })
        .collect()
}
