//! # EaglePanel Panelizer
//!
//! Tiles a single EAGLE board into a `cols` x `rows` manufacturing panel.
//!
//! ## Pipeline
//!
//! 1. [`geometry`]: finds the board extent on the dimension layer
//! 2. [`grid`]: derives the cell pitch and panel extent
//! 3. [`replicate`]: copies parts, nets, and outline primitives into each cell
//! 4. [`score`]: merges V-score lines into full-length panel cuts
//! 5. [`outline`]: adds the panel outline and corner mounting holes
//! 6. [`panelizer`]: drives the above over the document tree
//!
//! The engine is a pure in-memory transform; reading and writing board files
//! is left to the caller.
//!
//! ## Usage Example
//!
//! ```no_run
//! use eaglepanel_core::Document;
//! use eaglepanel_panelizer::{panelize, PanelConfig};
//!
//! fn tile(board: &Document) -> Result<Document, eaglepanel_panelizer::PanelizeError> {
//!     let config = PanelConfig::new(2, 3).with_spacing(2.0, 2.0);
//!     panelize(board, &config)
//! }
//! ```

pub mod config;
pub mod eagle;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod outline;
pub mod panelizer;
pub mod replicate;
pub mod score;

pub use config::{PanelConfig, PlainCopy};
pub use error::{PanelizeError, PanelizeResult};
pub use geometry::BoardGeometry;
pub use grid::Grid;
pub use panelizer::{panelize, Panelizer};
pub use replicate::{AttributeRule, Depth};
pub use score::ScoreMerger;
