//! Grid calculation
//!
//! Derives the per-cell pitch and the overall panel extent from the board
//! bounds and the configured spacing and frame.

use crate::config::PanelConfig;
use crate::error::PanelizeResult;
use eaglepanel_core::{Bounds, Cell};
use tracing::debug;

/// Layout of the board instances on the panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
    /// Horizontal distance between the origins of adjacent boards
    pub coloffset: f64,
    /// Vertical distance between the origins of adjacent boards
    pub rowoffset: f64,
    /// Extent of the source board
    pub board: Bounds,
    /// Extent of the whole panel, frame included
    pub panel: Bounds,
}

impl Grid {
    /// Compute the grid for a board of the given extent
    pub fn new(board: Bounds, config: &PanelConfig) -> PanelizeResult<Self> {
        config.validate()?;

        let coloffset = board.width() + config.col_spacing;
        let rowoffset = board.height() + config.row_spacing;
        let cols = f64::from(config.cols);
        let rows = f64::from(config.rows);

        let panel = Bounds::new(
            board.min_x - config.vframe,
            board.min_y - config.hframe,
            board.min_x + coloffset * cols - config.col_spacing + config.vframe,
            board.min_y + rowoffset * rows - config.row_spacing + config.hframe,
        );

        debug!(
            "Grid {}x{}: pitch ({}, {}), panel ({}, {}) - ({}, {})",
            config.cols,
            config.rows,
            coloffset,
            rowoffset,
            panel.min_x,
            panel.min_y,
            panel.max_x,
            panel.max_y
        );

        Ok(Self {
            cols: config.cols,
            rows: config.rows,
            coloffset,
            rowoffset,
            board,
            panel,
        })
    }

    /// Total number of board instances
    pub fn total_cells(&self) -> u32 {
        self.cols * self.rows
    }

    /// All cells, column by column
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let rows = self.rows;
        (0..self.cols).flat_map(move |x| (0..rows).map(move |y| Cell::new(x, y)))
    }

    /// Translation applied to the source board for `cell`
    pub fn offset(&self, cell: Cell) -> (f64, f64) {
        (
            f64::from(cell.x) * self.coloffset,
            f64::from(cell.y) * self.rowoffset,
        )
    }

    /// Extent of the board instance placed in `cell`
    pub fn board_at(&self, cell: Cell) -> Bounds {
        let (dx, dy) = self.offset(cell);
        self.board.translated(dx, dy)
    }
}
