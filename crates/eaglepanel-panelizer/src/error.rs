//! Error types for the panelizer crate.
//!
//! Every variant is fatal to a single panelize call: the engine either returns
//! a complete panel or nothing.

use thiserror::Error;

/// Errors that can occur while panelizing a board.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelizeError {
    /// The board has no outline (`plain`) section at all.
    #[error("No outline section found in board")]
    MissingOutline,

    /// The outline section exists but no usable board extent was found.
    #[error("No board dimension found: {0}")]
    MissingDimension(String),

    /// Column or row count is out of range.
    #[error("Invalid grid: cols={cols}, rows={rows} (both must be >= 1)")]
    InvalidGrid {
        /// Requested column count.
        cols: u32,
        /// Requested row count.
        rows: u32,
    },

    /// A spacing, frame, hole, or drill parameter is negative or not finite.
    #[error("Invalid value for '{name}': {value} (must be >= 0)")]
    InvalidSpacing {
        /// Parameter name.
        name: String,
        /// Rejected value.
        value: f64,
    },

    /// A primitive uses geometry the panelizer cannot handle.
    #[error("Unsupported geometry in <{tag}>: {reason}")]
    UnsupportedGeometry {
        /// Tag of the offending primitive.
        tag: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The document root is not an EAGLE document.
    #[error("Unsupported document root <{0}>, expected <eagle>")]
    UnsupportedDocument(String),

    /// A numeric attribute could not be parsed.
    #[error("Invalid number in <{tag} {attribute}=\"{value}\">")]
    InvalidNumber {
        /// Tag of the element carrying the attribute.
        tag: String,
        /// Attribute name.
        attribute: String,
        /// Raw attribute value.
        value: String,
    },
}

impl PanelizeError {
    pub(crate) fn unsupported(tag: &str, reason: impl Into<String>) -> Self {
        Self::UnsupportedGeometry {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for panelizer operations.
pub type PanelizeResult<T> = Result<T, PanelizeError>;
