//! # EaglePanel Core
//!
//! Core types shared by the EaglePanel crates:
//! - A generic, order-preserving document tree ([`Document`], [`Element`])
//! - Geometry value types used by the panelizer ([`Bounds`], [`Cell`], [`Coord`])
//! - Number parsing and formatting for coordinate attributes
//!
//! Nothing in this crate performs I/O.

pub mod document;
pub mod geometry;
pub mod units;

pub use document::{Document, Element};
pub use geometry::{Bounds, Cell, Coord};
pub use units::{format_mm, parse_mm};
