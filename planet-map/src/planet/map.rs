//! The planet map: adjacency store plus scanned-directions table.
//!
//! `PlanetMap` accumulates everything the rover learns about the planet,
//! one report at a time. Paths arrive as bidirectional records and are
//! stored as two directed half-edges; scans record which exits physically
//! exist at a node. Entries are only ever added or overwritten, never
//! removed, and the whole structure lives for one mission.

use std::collections::HashMap;

use log::debug;

use crate::core::{Direction, DirectionSet, HalfEdge, Node, NodeEdges, Weight};
use crate::error::{MapError, Result};
use crate::query::{self, RouteGoal, Step};

/// The incrementally-built map of a partially-observed planet.
///
/// Holds two tables:
/// - the adjacency map, `node -> (direction -> half-edge)`, fed by
///   [`add_path`](PlanetMap::add_path);
/// - the scanned-directions table, `node -> set of exits confirmed by a
///   physical scan`, fed by
///   [`set_available_node_directions`](PlanetMap::set_available_node_directions).
///
/// A node can sit in the adjacency map without ever having been scanned
/// (known only through third-party reports); the completeness predicate in
/// [`is_completely_explored`](PlanetMap::is_completely_explored) accounts
/// for both cases.
#[derive(Clone, Debug, Default)]
pub struct PlanetMap {
    /// Resolved paths per node, probably incomplete at any point in time.
    paths: HashMap<Node, NodeEdges>,
    /// Exits confirmed by a physical scan, per visited node.
    scanned: HashMap<Node, DirectionSet>,
}

impl PlanetMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `node` has an adjacency entry, creating an empty one if
    /// needed, and return it for editing.
    pub fn ensure_node(&mut self, node: Node) -> &mut NodeEdges {
        self.paths.entry(node).or_default()
    }

    /// Add a bidirectional path between `start` and `target`.
    ///
    /// Installs both half-edges in one call: departing `start` in its
    /// direction lands at `target`, and departing `target` in its direction
    /// lands back at `start`, both carrying `weight`. Re-reporting the same
    /// departure overwrites the previous entry. Unknown endpoints get
    /// adjacency entries as a side effect.
    ///
    /// `weight` must be `BLOCKED` or strictly positive; zero is a contract
    /// violation on the reporting side and is only caught in debug builds.
    pub fn add_path(
        &mut self,
        start: (Node, Direction),
        target: (Node, Direction),
        weight: Weight,
    ) {
        debug_assert!(weight != 0, "zero is never a legal path weight");

        for ((from, from_direction), (to, to_direction)) in [(start, target), (target, start)] {
            self.ensure_node(from)
                .set(from_direction, HalfEdge::new(to, to_direction, weight));
        }
        debug!(
            "path {} {} <-> {} {} weight {}",
            start.0,
            start.1,
            target.0,
            target.1,
            weight
        );
    }

    /// Record the full set of exits a physical scan confirmed at `node`.
    ///
    /// Overwrites any earlier scan of the same node, so re-scanning is
    /// idempotent. Marks `node` as visited for the completeness predicate
    /// and ensures it has an adjacency entry.
    pub fn set_available_node_directions(&mut self, node: Node, directions: DirectionSet) {
        self.ensure_node(node);
        self.scanned.insert(node, directions);
        debug!("scanned {}: {} exits", node, directions.len());
    }

    /// All known paths, keyed by node. Read-only snapshot view.
    #[inline]
    pub fn paths(&self) -> &HashMap<Node, NodeEdges> {
        &self.paths
    }

    /// The resolved edges at `node`, if the map has seen it.
    #[inline]
    pub fn node_edges(&self, node: Node) -> Option<&NodeEdges> {
        self.paths.get(&node)
    }

    /// Has any report mentioned `node` yet?
    #[inline]
    pub fn contains_node(&self, node: Node) -> bool {
        self.paths.contains_key(&node)
    }

    /// Number of nodes the map has seen.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.paths.len()
    }

    /// The exits a scan confirmed at `node`, if it was ever scanned.
    #[inline]
    pub fn scanned_directions(&self, node: Node) -> Option<DirectionSet> {
        self.scanned.get(&node).copied()
    }

    /// Is every exit of `node` accounted for?
    ///
    /// A visited node is completely explored when each scanned exit has a
    /// resolved half-edge. An unvisited node can still be completely
    /// explored when third-party reports have resolved all four directions,
    /// making a visit unnecessary.
    ///
    /// Fails with [`MapError::NodeUnknown`] if `node` has no adjacency
    /// entry at all.
    pub fn is_completely_explored(&self, node: Node) -> Result<bool> {
        let edges = self
            .paths
            .get(&node)
            .ok_or(MapError::NodeUnknown { node })?;
        Ok(self.all_exits_resolved(node, edges))
    }

    /// Completeness predicate for a node known to be in the adjacency map.
    fn all_exits_resolved(&self, node: Node, edges: &NodeEdges) -> bool {
        match self.scanned.get(&node) {
            Some(directions) => directions.len() == edges.resolved_count(),
            None => edges.resolved_count() == Direction::ALL.len(),
        }
    }

    /// Is `node` a frontier, i.e. known but not completely explored?
    /// Unknown nodes are not frontiers; there is nothing there to explore
    /// from.
    pub(crate) fn is_frontier(&self, node: Node) -> bool {
        match self.paths.get(&node) {
            Some(edges) => !self.all_exits_resolved(node, edges),
            None => false,
        }
    }

    /// One of the cheapest known paths from `start` to `target`.
    ///
    /// Returns an empty path when `start == target`, `None` when no
    /// unblocked route connects them or either node is unknown. Each step
    /// pairs a node with the direction to depart it in; the target itself
    /// contributes no step.
    pub fn shortest_path(&self, start: Node, target: Node) -> Option<Vec<Step>> {
        query::search(self, start, RouteGoal::Target(target))
    }

    /// The cheapest path from `start` to the nearest incompletely-explored
    /// node.
    ///
    /// Returns an empty path when `start` itself is not completely
    /// explored, `None` when no reachable frontier remains (or `start` is
    /// unknown).
    pub fn frontier_path(&self, start: Node) -> Option<Vec<Step>> {
        query::search(self, start, RouteGoal::Frontier)
    }

    /// Is exploration finished as seen from `current_node`?
    ///
    /// True when no incompletely-explored node is reachable from here any
    /// more. Meaningful only once `current_node` is on the map; for an
    /// unknown node this is trivially true.
    pub fn exploration_completed(&self, current_node: Node) -> bool {
        self.frontier_path(current_node).is_none()
    }
}
