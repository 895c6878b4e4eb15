//! Panel configuration
//!
//! All lengths are in millimetres. Every field has a default so partial
//! configuration files deserialize cleanly.

use crate::error::{PanelizeError, PanelizeResult};
use crate::eagle::{LAYER_DIMENSION, LAYER_VSCORE};
use serde::{Deserialize, Serialize};

/// How non-score primitives of the outline area are carried into the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlainCopy {
    /// Replicate every primitive into every cell
    #[default]
    PerCell,
    /// Copy every primitive once, unmodified
    Once,
}

impl std::fmt::Display for PlainCopy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerCell => write!(f, "per-cell"),
            Self::Once => write!(f, "once"),
        }
    }
}

/// Parameters for one panelization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Number of columns
    pub cols: u32,
    /// Number of rows
    pub rows: u32,
    /// Gap between adjacent columns (mm)
    pub col_spacing: f64,
    /// Gap between adjacent rows (mm)
    pub row_spacing: f64,
    /// Frame margin added above and below the boards (mm)
    pub hframe: f64,
    /// Frame margin added left and right of the boards (mm)
    pub vframe: f64,
    /// Horizontal inset of the corner mounting holes (mm). 0 disables holes.
    pub hole_offset_x: f64,
    /// Vertical inset of the corner mounting holes (mm). 0 disables holes.
    pub hole_offset_y: f64,
    /// Drill diameter of the corner mounting holes (mm)
    pub drill_diameter: f64,
    /// How far score lines run past the panel edge (mm)
    pub score_overtravel: f64,
    /// Layer carrying the board outline
    pub dimension_layer: String,
    /// Layer carrying V-score lines
    pub score_layer: String,
    /// Treatment of non-score outline-area primitives
    pub plain_copy: PlainCopy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            cols: 1,
            rows: 1,
            col_spacing: 0.0,
            row_spacing: 0.0,
            hframe: 0.0,
            vframe: 0.0,
            hole_offset_x: 0.0,
            hole_offset_y: 0.0,
            drill_diameter: 3.2,
            score_overtravel: 5.0,
            dimension_layer: LAYER_DIMENSION.to_string(),
            score_layer: LAYER_VSCORE.to_string(),
            plain_copy: PlainCopy::PerCell,
        }
    }
}

impl PanelConfig {
    /// Create a config for a `cols` x `rows` panel with default spacing
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    /// Set column and row spacing
    pub fn with_spacing(mut self, col_spacing: f64, row_spacing: f64) -> Self {
        self.col_spacing = col_spacing;
        self.row_spacing = row_spacing;
        self
    }

    /// Set the horizontal and vertical frame margins
    pub fn with_frame(mut self, hframe: f64, vframe: f64) -> Self {
        self.hframe = hframe;
        self.vframe = vframe;
        self
    }

    /// Set corner hole insets and drill diameter
    pub fn with_holes(mut self, offset_x: f64, offset_y: f64, drill_diameter: f64) -> Self {
        self.hole_offset_x = offset_x;
        self.hole_offset_y = offset_y;
        self.drill_diameter = drill_diameter;
        self
    }

    /// Set outline-area copy policy
    pub fn with_plain_copy(mut self, plain_copy: PlainCopy) -> Self {
        self.plain_copy = plain_copy;
        self
    }

    /// Whether corner holes will be emitted
    pub fn holes_enabled(&self) -> bool {
        self.hole_offset_x > 0.0 && self.hole_offset_y > 0.0 && self.drill_diameter > 0.0
    }

    /// Validate configuration
    pub fn validate(&self) -> PanelizeResult<()> {
        if self.cols < 1 || self.rows < 1 {
            return Err(PanelizeError::InvalidGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }

        let lengths = [
            ("col_spacing", self.col_spacing),
            ("row_spacing", self.row_spacing),
            ("hframe", self.hframe),
            ("vframe", self.vframe),
            ("hole_offset_x", self.hole_offset_x),
            ("hole_offset_y", self.hole_offset_y),
            ("drill_diameter", self.drill_diameter),
            ("score_overtravel", self.score_overtravel),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(PanelizeError::InvalidSpacing {
                    name: name.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}
