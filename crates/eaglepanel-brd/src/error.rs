//! Error types for board file I/O.

use thiserror::Error;

/// Errors raised while reading or writing `.brd` files.
#[derive(Error, Debug)]
pub enum BrdError {
    /// The input is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for board file I/O.
pub type BrdResult<T> = Result<T, BrdError>;
