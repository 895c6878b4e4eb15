//! Geometry value types

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Axis-aligned rectangle (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest rectangle containing all points, or `None` for an empty set
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        points.into_iter().fold(None, |acc, (x, y)| {
            Some(match acc {
                None => Self::new(x, y, x, y),
                Some(b) => Self::new(b.min_x.min(x), b.min_y.min(y), b.max_x.max(x), b.max_y.max(y)),
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `other` lies fully inside this rectangle (edges included)
    pub fn contains(&self, other: &Bounds) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// Copy of this rectangle shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.min_x + dx, self.min_y + dy, self.max_x + dx, self.max_y + dy)
    }
}

/// A grid cell, 0-indexed from the bottom-left board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Identity suffix appended to renamed attributes, e.g. `-1-0`
    pub fn suffix(&self) -> String {
        format!("-{}-{}", self.x, self.y)
    }
}

/// A coordinate usable as an exact-match map key.
///
/// Equality is bitwise on the normalised value: no tolerance is applied.
#[derive(Debug, Clone, Copy)]
pub struct Coord(f64);

impl Coord {
    pub fn new(value: f64) -> Self {
        // -0.0 + 0.0 == +0.0
        Self(value + 0.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Coord {}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
