//! # EaglePanel BRD
//!
//! Reads EAGLE `.brd` XML into an [`eaglepanel_core::Document`] and writes it
//! back out.
//!
//! Parsing is done with `roxmltree`; DTD declarations are accepted and the raw
//! DOCTYPE line is carried on the document so the panel keeps it.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{BrdError, BrdResult};
pub use reader::{read_file, read_from, read_str};
pub use writer::{write_file, write_string, write_to, XML_DECLARATION};
