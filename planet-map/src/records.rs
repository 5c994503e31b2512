//! Typed records crossing the transport boundary.
//!
//! The message layer hands the mission loop complete records; applying them
//! in arrival order is all the ingestion there is. Each shape maps onto one
//! map operation, and all weight validation happens here so that the map
//! itself can trust its inputs.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, DirectionSet, Node, Weight, BLOCKED};
use crate::error::{MapError, Result};
use crate::planet::PlanetMap;

/// Whether a reported path is usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Free,
    Blocked,
}

/// One unit of information handed over by the message layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// Mission entry point: the start node and the heading the rover
    /// arrived on.
    Origin { node: Node, orientation: Direction },

    /// A path between two nodes, traversed by the rover itself or reported
    /// by a third party. Free paths carry a strictly positive weight; the
    /// weight of a blocked path is ignored.
    Edge {
        start: Node,
        start_direction: Direction,
        end: Node,
        end_direction: Direction,
        status: PathStatus,
        weight: Weight,
    },

    /// The full set of exits a physical scan confirmed at a node.
    Scan { node: Node, directions: DirectionSet },

    /// An externally assigned destination.
    Target { node: Node },
}

/// What applying a record changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Origin registered; the entry lane is now marked impassable.
    Origin(Node),
    /// Both half-edges of a path installed.
    Edge {
        start: Node,
        end: Node,
        weight: Weight,
    },
    /// Scan stored for the node.
    Scan(Node),
    /// The map is untouched; the caller keeps the target.
    Target(Node),
}

impl PlanetMap {
    /// Apply one record to the map.
    ///
    /// Fails with [`MapError::InvalidWeight`] when a free path reports a
    /// weight that is not strictly positive. Target records change nothing
    /// here; the node is handed back for the caller to store.
    pub fn apply(&mut self, record: Record) -> Result<Applied> {
        match record {
            Record::Origin { node, orientation } => {
                // The lane the rover arrived on leads back off the known
                // planet; a blocked self-loop keeps routing away from it.
                let back = orientation.opposite();
                self.add_path((node, back), (node, back), BLOCKED);
                Ok(Applied::Origin(node))
            }
            Record::Edge {
                start,
                start_direction,
                end,
                end_direction,
                status,
                weight,
            } => {
                let weight = match status {
                    PathStatus::Blocked => BLOCKED,
                    PathStatus::Free if weight > 0 => weight,
                    PathStatus::Free => return Err(MapError::InvalidWeight { weight }),
                };
                self.add_path((start, start_direction), (end, end_direction), weight);
                Ok(Applied::Edge { start, end, weight })
            }
            Record::Scan { node, directions } => {
                self.set_available_node_directions(node, directions);
                Ok(Applied::Scan(node))
            }
            Record::Target { node } => Ok(Applied::Target(node)),
        }
    }
}
