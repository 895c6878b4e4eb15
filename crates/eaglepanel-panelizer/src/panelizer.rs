//! Panelization orchestrator
//!
//! Walks an EAGLE board document once and builds the panel document. All
//! state of a run (grid, collected labels, score lines) lives in a
//! [`PanelRun`] created per call, so a [`Panelizer`] can be reused and shared
//! between threads.

use crate::config::{PanelConfig, PlainCopy};
use crate::eagle::{TAG_BOARD, TAG_DRAWING, TAG_EAGLE, TAG_ELEMENTS, TAG_PLAIN, TAG_SIGNALS};
use crate::error::{PanelizeError, PanelizeResult};
use crate::geometry::{self, BoardGeometry};
use crate::grid::Grid;
use crate::outline::{corner_holes, panel_outline};
use crate::replicate::{label_for, replicate, Depth};
use crate::score::ScoreMerger;
use eaglepanel_core::{Document, Element};
use tracing::{debug, info, warn};

/// Tiles boards into panels with a fixed configuration
#[derive(Debug, Clone)]
pub struct Panelizer {
    config: PanelConfig,
}

impl Panelizer {
    /// Create a panelizer, validating the configuration up front
    pub fn new(config: PanelConfig) -> PanelizeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build the panel document for `source`
    pub fn panelize(&self, source: &Document) -> PanelizeResult<Document> {
        let root = &source.root;
        if root.tag != TAG_EAGLE {
            return Err(PanelizeError::UnsupportedDocument(root.tag.clone()));
        }
        let plain = root
            .find_path(&[TAG_DRAWING, TAG_BOARD, TAG_PLAIN])
            .ok_or(PanelizeError::MissingOutline)?;

        let geometry = geometry::extract(plain, &self.config.dimension_layer)?;
        let grid = Grid::new(geometry.bounds, &self.config)?;
        let run = PanelRun {
            config: &self.config,
            geometry,
            grid,
        };
        let panel = run.eagle(root)?;

        info!(
            "Panelized {}x{} boards into {} x {} mm panel",
            grid.cols,
            grid.rows,
            grid.panel.width(),
            grid.panel.height()
        );

        Ok(Document {
            doctype: source.doctype.clone(),
            root: panel,
        })
    }
}

/// Panelize `source` with `config` in a single call
pub fn panelize(source: &Document, config: &PanelConfig) -> PanelizeResult<Document> {
    Panelizer::new(config.clone())?.panelize(source)
}

/// State of one panelization pass
struct PanelRun<'a> {
    config: &'a PanelConfig,
    geometry: BoardGeometry,
    grid: Grid,
}

impl PanelRun<'_> {
    fn eagle(&self, eagle: &Element) -> PanelizeResult<Element> {
        let mut dst = eagle.shallow_clone();
        for child in &eagle.children {
            if child.tag == TAG_DRAWING {
                dst.push(self.drawing(child)?);
            } else {
                dst.push(child.clone());
            }
        }
        Ok(dst)
    }

    fn drawing(&self, drawing: &Element) -> PanelizeResult<Element> {
        let mut dst = drawing.shallow_clone();
        for child in &drawing.children {
            if child.tag == TAG_BOARD {
                dst.push(self.board(child)?);
            } else {
                dst.push(child.clone());
            }
        }
        Ok(dst)
    }

    fn board(&self, board: &Element) -> PanelizeResult<Element> {
        let mut dst = board.shallow_clone();
        let mut plain_index = None;
        let mut labels = Vec::new();

        for section in &board.children {
            match section.tag.as_str() {
                TAG_PLAIN if plain_index.is_none() => {
                    plain_index = Some(dst.children.len());
                    dst.push(self.plain(section)?);
                }
                TAG_ELEMENTS => {
                    let (elements, mut found) = self.elements(section)?;
                    labels.append(&mut found);
                    dst.push(elements);
                }
                TAG_SIGNALS => dst.push(self.signals(section)?),
                _ => dst.push(section.clone()),
            }
        }

        let Some(index) = plain_index else {
            warn!("Board without <plain> section left without panel outline");
            return Ok(dst);
        };
        debug!("Injecting {} part labels into <plain>", labels.len());
        let plain = &mut dst.children[index];
        plain.children.extend(labels);
        plain.children.extend(panel_outline(
            &self.grid,
            &self.config.dimension_layer,
            self.geometry.outline_width,
        ));
        plain.children.extend(corner_holes(&self.grid, self.config));
        Ok(dst)
    }

    fn plain(&self, plain: &Element) -> PanelizeResult<Element> {
        let mut dst = plain.shallow_clone();
        let mut merger = ScoreMerger::new(
            &self.grid,
            &self.config.score_layer,
            self.config.score_overtravel,
        );

        for elem in &plain.children {
            if merger.accepts(elem) {
                merger.add(elem)?;
                continue;
            }
            match self.config.plain_copy {
                PlainCopy::PerCell => {
                    for cell in self.grid.cells() {
                        dst.push(replicate(elem, cell, &self.grid, Depth::Deep)?);
                    }
                }
                PlainCopy::Once => dst.push(elem.clone()),
            }
        }

        debug!("Merged score layer into {} lines", merger.line_count());
        dst.children.extend(merger.finish());
        Ok(dst)
    }

    fn elements(&self, elements: &Element) -> PanelizeResult<(Element, Vec<Element>)> {
        let mut dst = elements.shallow_clone();
        let mut labels = Vec::new();

        for cell in self.grid.cells() {
            for placement in &elements.children {
                dst.push(replicate(placement, cell, &self.grid, Depth::Shallow)?);
                match label_for(placement, cell, &self.grid)? {
                    Some(label) if label.text.is_some() => labels.push(label),
                    Some(_) => warn!("Skipping label of unnamed <{}>", placement.tag),
                    None => {}
                }
            }
        }
        Ok((dst, labels))
    }

    fn signals(&self, signals: &Element) -> PanelizeResult<Element> {
        let mut dst = signals.shallow_clone();
        for cell in self.grid.cells() {
            for signal in &signals.children {
                dst.push(replicate(signal, cell, &self.grid, Depth::Deep)?);
            }
        }
        Ok(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_doc(plain: Element) -> Document {
        Document::new(
            Element::new("eagle").with_attr("version", "9.6.2").with_child(
                Element::new("drawing")
                    .with_child(Element::new("layers"))
                    .with_child(Element::new("board").with_child(plain)),
            ),
        )
    }

    fn square_plain() -> Element {
        let wire = |x1: &str, y1: &str, x2: &str, y2: &str| {
            Element::new("wire")
                .with_attr("x1", x1)
                .with_attr("y1", y1)
                .with_attr("x2", x2)
                .with_attr("y2", y2)
                .with_attr("width", "0")
                .with_attr("layer", "20")
        };
        Element::new("plain")
            .with_child(wire("0", "0", "10", "0"))
            .with_child(wire("10", "0", "10", "10"))
            .with_child(wire("10", "10", "0", "10"))
            .with_child(wire("0", "10", "0", "0"))
    }

    #[test]
    fn test_rejects_non_eagle_root() {
        let doc = Document::new(Element::new("svg"));
        assert_eq!(
            panelize(&doc, &PanelConfig::new(2, 2)),
            Err(PanelizeError::UnsupportedDocument("svg".to_string()))
        );
    }

    #[test]
    fn test_missing_outline() {
        let doc = Document::new(
            Element::new("eagle")
                .with_child(Element::new("drawing").with_child(Element::new("board"))),
        );
        assert_eq!(
            panelize(&doc, &PanelConfig::new(2, 2)),
            Err(PanelizeError::MissingOutline)
        );
    }

    #[test]
    fn test_invalid_config_is_rejected_before_walking() {
        assert!(matches!(
            Panelizer::new(PanelConfig::new(0, 1)),
            Err(PanelizeError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_other_sections_copied_once() {
        let doc = board_doc(square_plain());
        let panel = panelize(&doc, &PanelConfig::new(3, 3)).unwrap();
        let drawing = panel.root.child("drawing").unwrap();
        assert_eq!(drawing.children_named("layers").count(), 1);
        assert_eq!(panel.root.attr("version"), Some("9.6.2"));
    }

    #[test]
    fn test_plain_copy_once() {
        let plain = square_plain().with_child(
            Element::new("text").with_attr("x", "1").with_attr("y", "1").with_text("REV A"),
        );
        let doc = board_doc(plain);
        let config = PanelConfig::new(2, 2).with_plain_copy(PlainCopy::Once);
        let panel = panelize(&doc, &config).unwrap();
        let plain = panel.root.find_path(&["drawing", "board", "plain"]).unwrap();

        let texts: Vec<_> = plain.children_named("text").collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].attr("x"), Some("1"));
        // 4 source outline wires + 4 panel outline wires
        assert_eq!(plain.children_named("wire").count(), 8);
    }

    #[test]
    fn test_panelizer_is_reusable() {
        let panelizer = Panelizer::new(PanelConfig::new(2, 1)).unwrap();
        let doc = board_doc(square_plain());
        let first = panelizer.panelize(&doc).unwrap();
        let second = panelizer.panelize(&doc).unwrap();
        assert_eq!(first, second);
    }
}
