//! Exploration decision engine.
//!
//! `DecisionEngine` answers one question at each node the rover stands on:
//! which exit to take next. It prefers finishing the assigned target route,
//! falls back to general exploration when the target cannot be reached yet,
//! and reports exploration complete once no frontier remains.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{Direction, Node};
use crate::error::{MapError, Result};
use crate::planet::PlanetMap;

/// Picks the next heading for the exploring agent.
///
/// Carries its own random source so that the choice among equally-valid
/// unexplored exits is replayable: two engines built from the same seed make
/// the same picks over the same map.
#[derive(Debug)]
pub struct DecisionEngine {
    rng: StdRng,
}

impl DecisionEngine {
    /// Create an engine whose exit choices replay for the same `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an engine from an already-built random source.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Decide the next exit to take from `start`.
    ///
    /// With no `target` and unexplored exits at `start`, picks one of them
    /// at random. Otherwise routes: to `target` when given, else to the
    /// nearest frontier. A target that is not reachable yet falls back to
    /// frontier routing instead of giving up. `Ok(None)` means exploration
    /// is complete: nothing left to explore and nowhere to go.
    ///
    /// Fails with [`MapError::NodeUnknown`] when a needed table has never
    /// seen `start` (scan report not applied yet).
    pub fn next_direction(
        &mut self,
        map: &PlanetMap,
        start: Node,
        target: Option<Node>,
    ) -> Result<Option<Direction>> {
        if target.is_none() && !map.is_completely_explored(start)? {
            if let Some(direction) = self.unexplored_exit(map, start)? {
                return Ok(Some(direction));
            }
            // Incomplete without a pickable exit means scan and path
            // reports disagree; fall through to routing.
        }

        let mut route = match target {
            Some(target) => map.shortest_path(start, target),
            None => map.frontier_path(start),
        };

        if route.is_none() {
            if let Some(target) = target {
                warn!(
                    "target {} not reachable from {}, resuming exploration",
                    target, start
                );
                route = map.frontier_path(start);
            }
        }

        match route {
            // Nothing reachable in either mode: exploration complete
            None => {
                debug!("exploration complete at {}", start);
                Ok(None)
            }
            Some(steps) => {
                if let Some(first) = steps.first() {
                    return Ok(Some(first.direction));
                }
                // Empty route: already where the routing stopped. Prefer an
                // unexplored exit here over idling.
                if let Some(direction) = self.unexplored_exit(map, start)? {
                    return Ok(Some(direction));
                }
                match map.frontier_path(start) {
                    Some(steps) if !steps.is_empty() => Ok(Some(steps[0].direction)),
                    _ => Ok(None),
                }
            }
        }
    }

    /// Pick one scanned-but-unresolved exit at `node`, if any remain.
    ///
    /// The candidate set is exactly the scanned directions without a
    /// resolved half-edge; any of them is an equally valid pick, so the
    /// choice comes from the injected random source. Fails with
    /// [`MapError::NodeUnknown`] when `node` was never scanned.
    fn unexplored_exit(&mut self, map: &PlanetMap, node: Node) -> Result<Option<Direction>> {
        let scanned = map
            .scanned_directions(node)
            .ok_or(MapError::NodeUnknown { node })?;
        let edges = match map.node_edges(node) {
            Some(edges) => edges,
            None => return Err(MapError::NodeUnknown { node }),
        };

        let candidates: Vec<Direction> = scanned
            .iter()
            .filter(|direction| !edges.is_resolved(*direction))
            .collect();
        if candidates.is_empty() {
            return Ok(None);
        }

        let pick = candidates[self.rng.random_range(0..candidates.len())];
        debug!("unexplored exit at {}: heading {}", node, pick);
        Ok(Some(pick))
    }
}
