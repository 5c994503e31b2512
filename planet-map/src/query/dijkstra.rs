//! Shortest-path search over the planet graph.
//!
//! One Dijkstra loop serves two goals: routing to an explicit target node,
//! and finding the nearest node that still has unexplored exits (the
//! frontier). Blocked edges are known but never relaxed. Ties between
//! equal-cost entries are broken by node coordinate and then by the edge
//! taken, so repeated queries over the same map return the same route.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, Node};
use crate::planet::PlanetMap;

/// Where a search should stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGoal {
    /// Stop once this node is settled.
    Target(Node),
    /// Stop at the nearest node that is not completely explored.
    Frontier,
}

/// One step of a route: a node and the exit to take from it.
///
/// A full route lists every node from the start up to, but not including,
/// the destination; following each step's direction walks the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Node the step departs from
    pub node: Node,
    /// Exit to take at that node
    pub direction: Direction,
}

impl Step {
    /// Create a new step.
    #[inline]
    pub fn new(node: Node, direction: Direction) -> Self {
        Self { node, direction }
    }
}

/// Priority-queue entry: accumulated cost to `node`, plus the settled
/// predecessor and exit the entry was relaxed over (`None` at the start).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueEntry {
    cost: i64,
    node: Node,
    via: Option<(Node, Direction)>,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default).
        // Cost decides; the node coordinate and incoming edge break ties so
        // equal-cost routes settle in one reproducible order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.via.cmp(&self.via))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest route from `start` to `goal` over the known paths.
///
/// # Returns
/// - `Some(steps)` with the route, one [`Step`] per node left behind;
/// - `Some(vec![])` when `start` already satisfies the goal;
/// - `None` when the goal is unreachable or an endpoint is unknown.
pub fn search(map: &PlanetMap, start: Node, goal: RouteGoal) -> Option<Vec<Step>> {
    if !map.contains_node(start) {
        return None;
    }
    match goal {
        RouteGoal::Target(target) => {
            if !map.contains_node(target) {
                return None;
            }
            if start == target {
                return Some(Vec::new());
            }
        }
        RouteGoal::Frontier => {
            if map.is_frontier(start) {
                return Some(Vec::new());
            }
        }
    }

    // Cheapest cost found so far per node; final once the node is settled.
    let mut best: HashMap<Node, i64> = HashMap::new();
    // Settled node -> (predecessor, exit taken from it).
    let mut prev: HashMap<Node, (Node, Direction)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    best.insert(start, 0);
    heap.push(QueueEntry {
        cost: 0,
        node: start,
        via: None,
    });

    let mut found = None;

    while let Some(QueueEntry { cost, node, via }) = heap.pop() {
        // Stale entry: a cheaper route to this node was settled already
        if cost > best.get(&node).copied().unwrap_or(i64::MAX) {
            continue;
        }

        if let Some(step) = via {
            prev.insert(node, step);
        }

        let done = match goal {
            RouteGoal::Target(target) => node == target,
            RouteGoal::Frontier => map.is_frontier(node),
        };
        if done {
            found = Some(node);
            break;
        }

        if let Some(edges) = map.node_edges(node) {
            for (direction, edge) in edges.iter() {
                if edge.is_blocked() {
                    continue;
                }
                let next_cost = cost + i64::from(edge.weight);
                if next_cost < best.get(&edge.target).copied().unwrap_or(i64::MAX) {
                    best.insert(edge.target, next_cost);
                    heap.push(QueueEntry {
                        cost: next_cost,
                        node: edge.target,
                        via: Some((node, direction)),
                    });
                }
            }
        }
    }

    let target = match found {
        Some(node) => node,
        None => {
            debug!("no route from {} for {:?}", start, goal);
            return None;
        }
    };

    // Walk the settled predecessors back from the destination
    let mut steps = Vec::new();
    let mut current = target;
    while current != start {
        match prev.get(&current) {
            Some(&(node, direction)) => {
                steps.push(Step::new(node, direction));
                current = node;
            }
            None => return None, // no settled chain
        }
    }
    steps.reverse();

    debug!(
        "route {} -> {}: {} steps, cost {}",
        start,
        target,
        steps.len(),
        best.get(&target).copied().unwrap_or(0)
    );
    Some(steps)
}
