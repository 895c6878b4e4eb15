//! V-score line merging
//!
//! Score lines are not copied per cell. Each straight score segment is
//! projected onto every column (vertical) or row (horizontal) of the panel,
//! coincident projections are merged keeping the widest stroke, and one
//! full-length line is emitted per distinct coordinate.

use crate::eagle::{is_curved_on_layer, Segment, TAG_WIRE};
use crate::error::{PanelizeError, PanelizeResult};
use crate::grid::Grid;
use eaglepanel_core::{format_mm, Coord, Element};
use std::collections::BTreeMap;

/// Accumulates score segments for one panel
#[derive(Debug)]
pub struct ScoreMerger<'a> {
    grid: &'a Grid,
    layer: &'a str,
    overtravel: f64,
    vertical: BTreeMap<Coord, f64>,
    horizontal: BTreeMap<Coord, f64>,
}

impl<'a> ScoreMerger<'a> {
    pub fn new(grid: &'a Grid, layer: &'a str, overtravel: f64) -> Self {
        Self {
            grid,
            layer,
            overtravel,
            vertical: BTreeMap::new(),
            horizontal: BTreeMap::new(),
        }
    }

    /// Whether `element` belongs to the score layer and must go through [`ScoreMerger::add`]
    pub fn accepts(&self, element: &Element) -> bool {
        element.attr("layer") == Some(self.layer)
            && (element.tag == TAG_WIRE || is_curved_on_layer(element, self.layer))
    }

    /// Project a score primitive across the grid
    pub fn add(&mut self, element: &Element) -> PanelizeResult<()> {
        if element.tag != TAG_WIRE {
            return Err(PanelizeError::unsupported(
                &element.tag,
                format!("curved score primitive on layer {}", self.layer),
            ));
        }
        let segment = Segment::from_wire(element)?;

        if segment.is_vertical() {
            for col in 0..self.grid.cols {
                let x = segment.x1 + f64::from(col) * self.grid.coloffset;
                widen(&mut self.vertical, x, segment.width);
            }
        } else if segment.is_horizontal() {
            for row in 0..self.grid.rows {
                let y = segment.y1 + f64::from(row) * self.grid.rowoffset;
                widen(&mut self.horizontal, y, segment.width);
            }
        } else {
            return Err(PanelizeError::unsupported(
                &element.tag,
                format!(
                    "diagonal score line ({}, {}) - ({}, {})",
                    segment.x1, segment.y1, segment.x2, segment.y2
                ),
            ));
        }
        Ok(())
    }

    /// Number of distinct lines that [`ScoreMerger::finish`] will emit
    pub fn line_count(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }

    /// Emit vertical lines by ascending X, then horizontal lines by ascending Y
    pub fn finish(self) -> Vec<Element> {
        let panel = self.grid.panel;
        let (bottom, top) = (panel.min_y - self.overtravel, panel.max_y + self.overtravel);
        let (left, right) = (panel.min_x - self.overtravel, panel.max_x + self.overtravel);

        let vertical = self
            .vertical
            .iter()
            .map(|(x, width)| line(self.layer, (x.value(), bottom), (x.value(), top), *width));
        let horizontal = self
            .horizontal
            .iter()
            .map(|(y, width)| line(self.layer, (left, y.value()), (right, y.value()), *width));
        vertical.chain(horizontal).collect()
    }
}

fn widen(lines: &mut BTreeMap<Coord, f64>, at: f64, width: f64) {
    let entry = lines.entry(Coord::new(at)).or_insert(width);
    *entry = entry.max(width);
}

/// A straight `<wire>` on `layer`
pub(crate) fn line(layer: &str, from: (f64, f64), to: (f64, f64), width: f64) -> Element {
    Element::new(TAG_WIRE)
        .with_attr("x1", format_mm(from.0))
        .with_attr("y1", format_mm(from.1))
        .with_attr("x2", format_mm(to.0))
        .with_attr("y2", format_mm(to.1))
        .with_attr("width", format_mm(width))
        .with_attr("layer", layer)
}
