//! Node coordinates on the planet grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A planet node, addressed by its unbounded grid coordinate.
///
/// Nodes are pure values; the map creates them implicitly the first time a
/// reported path mentions them. The derived `Ord` is lexicographic by
/// `(x, y)`, which the router relies on for reproducible tie-breaking.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Node {
    /// X coordinate (east positive)
    pub x: i32,
    /// Y coordinate (north positive)
    pub y: i32,
}

impl Node {
    /// Create a new node coordinate.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Node {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Node::new(x, y)
    }
}
