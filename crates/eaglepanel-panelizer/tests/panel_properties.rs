// Property tests for panel geometry invariants

mod common;

use common::{board, num, outline, part, section, wire};
use eaglepanel_core::{Bounds, Cell};
use eaglepanel_panelizer::{panelize, Grid, PanelConfig};
use proptest::prelude::*;
use std::collections::HashSet;

fn config_strategy() -> impl Strategy<Value = PanelConfig> {
    (
        1u32..5,
        1u32..5,
        0.0f64..10.0,
        0.0f64..10.0,
        0.0f64..8.0,
        0.0f64..8.0,
    )
        .prop_map(|(cols, rows, cs, rs, hf, vf)| {
            PanelConfig::new(cols, rows)
                .with_spacing(cs, rs)
                .with_frame(hf, vf)
        })
}

fn board_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (-50.0f64..50.0, -50.0f64..50.0, 1.0f64..120.0, 1.0f64..120.0)
}

/// Lengths on a quarter-millimetre grid, so panel arithmetic is exact
fn quarter_mm(max_quarters: u32) -> impl Strategy<Value = f64> {
    (0..=max_quarters).prop_map(|q| f64::from(q) / 4.0)
}

proptest! {
    #[test]
    fn every_board_lies_inside_the_panel(
        cols in 1u32..6,
        rows in 1u32..6,
        (x, y) in (-200i32..200, -200i32..200),
        (w, h) in (1u32..400, 1u32..400),
        (cs, rs) in (quarter_mm(40), quarter_mm(40)),
        (hf, vf) in (quarter_mm(40), quarter_mm(40)),
    ) {
        let min_x = f64::from(x) / 4.0;
        let min_y = f64::from(y) / 4.0;
        let board = Bounds::new(min_x, min_y, min_x + f64::from(w) / 4.0, min_y + f64::from(h) / 4.0);
        let config = PanelConfig::new(cols, rows).with_spacing(cs, rs).with_frame(hf, vf);
        let grid = Grid::new(board, &config).unwrap();

        for cell in grid.cells() {
            let placed = grid.board_at(cell);
            prop_assert!(grid.panel.contains(&placed), "{:?} outside {:?}", placed, grid.panel);
        }
        let last = grid.board_at(Cell::new(cols - 1, rows - 1));
        prop_assert_eq!(grid.panel.max_x, last.max_x + vf);
        prop_assert_eq!(grid.panel.max_y, last.max_y + hf);
    }

    #[test]
    fn outline_matches_computed_panel_bounds(
        config in config_strategy(),
        (x, y, w, h) in board_strategy(),
    ) {
        let doc = board(outline(x, y, x + w, y + h, 0.1), vec![], vec![]);
        let panel = panelize(&doc, &config).unwrap();

        let board_bounds = Bounds::new(x, y, x + w, y + h);
        let coloffset = (x + w - x) + config.col_spacing;
        let rowoffset = (y + h - y) + config.row_spacing;
        let expected = Bounds::new(
            x - config.vframe,
            y - config.hframe,
            x + coloffset * f64::from(config.cols) - config.col_spacing + config.vframe,
            y + rowoffset * f64::from(config.rows) - config.row_spacing + config.hframe,
        );

        let plain = section(&panel, "plain");
        let edges: Vec<_> = plain.children.iter().rev().take(4).collect();
        let xs: Vec<f64> = edges.iter().flat_map(|e| [num(e, "x1"), num(e, "x2")]).collect();
        let ys: Vec<f64> = edges.iter().flat_map(|e| [num(e, "y1"), num(e, "y2")]).collect();
        let got = Bounds::new(
            xs.iter().cloned().fold(f64::INFINITY, f64::min),
            ys.iter().cloned().fold(f64::INFINITY, f64::min),
            xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        );
        prop_assert_eq!(got, expected);

        let grid = Grid::new(board_bounds, &config).unwrap();
        prop_assert_eq!(grid.panel, expected);
        prop_assert_eq!(grid.cells().count() as u32, grid.total_cells());
    }

    #[test]
    fn single_cell_keeps_coordinates(
        (x, y, w, h) in board_strategy(),
        px in 0.0f64..1.0,
        py in 0.0f64..1.0,
    ) {
        let part_x = x + px * w;
        let part_y = y + py * h;
        let doc = board(
            outline(x, y, x + w, y + h, 0.1),
            vec![part("Q1", part_x, part_y)],
            vec![],
        );
        let panel = panelize(&doc, &PanelConfig::new(1, 1)).unwrap();

        let placed = &section(&panel, "elements").children[0];
        prop_assert_eq!(num(placed, "x"), part_x);
        prop_assert_eq!(num(placed, "y"), part_y);
        prop_assert_eq!(placed.attr("name"), Some("Q1-0-0"));

        let src_plain = section(&doc, "plain");
        let dst_plain = section(&panel, "plain");
        for (s, d) in src_plain.children.iter().zip(&dst_plain.children) {
            prop_assert_eq!(&s.attributes, &d.attributes);
        }
    }

    #[test]
    fn replicated_names_are_unique(cols in 1u32..6, rows in 1u32..6) {
        let doc = board(
            outline(0.0, 0.0, 20.0, 10.0, 0.1),
            vec![part("R1", 2.0, 2.0), part("R2", 6.0, 2.0), part("R12", 10.0, 2.0)],
            vec![],
        );
        let panel = panelize(&doc, &PanelConfig::new(cols, rows)).unwrap();
        let names: Vec<_> = section(&panel, "elements")
            .children
            .iter()
            .map(|e| e.attr("name").unwrap().to_string())
            .collect();
        let unique: HashSet<_> = names.iter().collect();
        prop_assert_eq!(names.len(), (3 * cols * rows) as usize);
        prop_assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn one_score_pair_yields_cols_plus_rows_lines(
        config in config_strategy(),
        sx in 0.0f64..1.0,
        sy in 0.0f64..1.0,
    ) {
        let (w, h) = (40.0, 30.0);
        let x0 = sx * w;
        let y0 = sy * h;
        let mut plain = outline(0.0, 0.0, w, h, 0.1);
        plain.push(wire(x0, 0.0, x0, h, 0.2, "102"));
        plain.push(wire(0.0, y0, w, y0, 0.2, "102"));
        let panel = panelize(&board(plain, vec![], vec![]), &config).unwrap();

        let grid = Grid::new(Bounds::new(0.0, 0.0, w, h), &config).unwrap();
        let scores: Vec<_> = section(&panel, "plain")
            .children_named("wire")
            .filter(|e| e.attr("layer") == Some("102"))
            .collect();
        prop_assert_eq!(scores.len(), (config.cols + config.rows) as usize);

        let (vertical, horizontal) = scores.split_at(config.cols as usize);
        for (i, line) in vertical.iter().enumerate() {
            let (dx, _) = grid.offset(Cell::new(i as u32, 0));
            prop_assert_eq!(num(line, "x1"), x0 + dx);
            prop_assert_eq!(num(line, "y1"), grid.panel.min_y - 5.0);
            prop_assert_eq!(num(line, "y2"), grid.panel.max_y + 5.0);
        }
        for (j, line) in horizontal.iter().enumerate() {
            let (_, dy) = grid.offset(Cell::new(0, j as u32));
            prop_assert_eq!(num(line, "y1"), y0 + dy);
            prop_assert_eq!(num(line, "x1"), grid.panel.min_x - 5.0);
            prop_assert_eq!(num(line, "x2"), grid.panel.max_x + 5.0);
        }
    }
}
