//! Path weights and per-node edge storage.

use serde::{Deserialize, Serialize};

use super::{Direction, Node};

/// Weight of a reported path.
///
/// `BLOCKED` (-1) for an impassable path, strictly positive otherwise.
/// Zero is never legal; producing one is a contract violation on the
/// reporting side.
pub type Weight = i32;

/// Sentinel weight for a path that exists but must never be routed over.
pub const BLOCKED: Weight = -1;

/// One directed entry of a bidirectional path.
///
/// Departing a node in some direction lands on `target`, arriving on the
/// lane that leaves `target` in `arrival`. The reciprocal entry is stored at
/// `target` and points back here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfEdge {
    /// Node this edge leads to
    pub target: Node,
    /// Direction the reciprocal path departs from `target`
    pub arrival: Direction,
    /// Reported path weight
    pub weight: Weight,
}

impl HalfEdge {
    /// Create a new half-edge.
    #[inline]
    pub fn new(target: Node, arrival: Direction, weight: Weight) -> Self {
        Self {
            target,
            arrival,
            weight,
        }
    }

    /// Is this edge impassable?
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.weight == BLOCKED
    }
}

/// The resolved half-edges at one node, one slot per cardinal direction.
///
/// A node has at most four outgoing paths, so a fixed table beats a map:
/// iteration order is always N, E, S, W and lookups are a slot index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEdges {
    slots: [Option<HalfEdge>; 4],
}

impl NodeEdges {
    /// Create an empty edge table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The half-edge departing in `direction`, if resolved.
    #[inline]
    pub fn get(&self, direction: Direction) -> Option<HalfEdge> {
        self.slots[direction.index()]
    }

    /// Install or overwrite the half-edge departing in `direction`.
    #[inline]
    pub fn set(&mut self, direction: Direction, edge: HalfEdge) {
        self.slots[direction.index()] = Some(edge);
    }

    /// Is a half-edge resolved in `direction`?
    #[inline]
    pub fn is_resolved(&self, direction: Direction) -> bool {
        self.slots[direction.index()].is_some()
    }

    /// Number of resolved directions at this node.
    #[inline]
    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Does this node have no resolved edges at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Iterate resolved half-edges in N, E, S, W order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, HalfEdge)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.get(direction).map(|edge| (direction, edge)))
    }
}
