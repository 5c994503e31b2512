//! Scenario files: the ground truth a mission replays.
//!
//! A scenario is the whole planet as YAML, standing in for the physical
//! world the real rover would discover by driving over it. Paths are listed
//! once; the mission resolves the orientation when the rover departs from
//! either end. Scan results are derived from the path list, since the
//! scanner sees exactly the physical exits of a node.

use crate::error::{NavError, Result};
use planet_map::{Direction, DirectionSet, Node, PathStatus, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Where and how the rover enters the planet.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Start {
    pub node: Node,
    /// Heading the rover arrives on; the lane behind it is sealed.
    pub orientation: Direction,
}

/// One physical path of the ground truth.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PathEntry {
    pub start: Node,
    pub start_direction: Direction,
    pub end: Node,
    pub end_direction: Direction,
    #[serde(default = "default_status")]
    pub status: PathStatus,
    pub weight: Weight,
}

fn default_status() -> PathStatus {
    PathStatus::Free
}

/// A path as seen from one of its ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Departure {
    pub to: Node,
    pub arrival: Direction,
    pub status: PathStatus,
    pub weight: Weight,
}

/// Ground truth for one mission.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Scenario {
    pub name: String,
    pub start: Start,
    /// Destination assigned up front; absent means free exploration.
    #[serde(default)]
    pub target: Option<Node>,
    pub paths: Vec<PathEntry>,
}

impl Scenario {
    /// Load and validate a scenario from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a scenario from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// The path leaving `node` towards `direction`, if the world has one.
    pub fn departure(&self, node: Node, direction: Direction) -> Option<Departure> {
        for path in &self.paths {
            if path.start == node && path.start_direction == direction {
                return Some(Departure {
                    to: path.end,
                    arrival: path.end_direction,
                    status: path.status,
                    weight: path.weight,
                });
            }
            if path.end == node && path.end_direction == direction {
                return Some(Departure {
                    to: path.start,
                    arrival: path.start_direction,
                    status: path.status,
                    weight: path.weight,
                });
            }
        }
        None
    }

    /// What a scan at `node` reports: every direction a path departs in.
    pub fn scan_at(&self, node: Node) -> DirectionSet {
        let mut directions = DirectionSet::new();
        for path in &self.paths {
            if path.start == node {
                directions.insert(path.start_direction);
            }
            if path.end == node {
                directions.insert(path.end_direction);
            }
        }
        directions
    }

    /// Number of distinct nodes on the planet.
    pub fn node_count(&self) -> usize {
        self.paths
            .iter()
            .flat_map(|path| [path.start, path.end])
            .collect::<HashSet<_>>()
            .len()
    }

    fn validate(&self) -> Result<()> {
        let mut departures = HashSet::new();
        for path in &self.paths {
            if path.status == PathStatus::Free && path.weight <= 0 {
                return Err(NavError::Scenario(format!(
                    "free path {} {} to {} {} needs a positive weight, got {}",
                    path.start, path.start_direction, path.end, path.end_direction, path.weight
                )));
            }
            for (node, direction) in [
                (path.start, path.start_direction),
                (path.end, path.end_direction),
            ] {
                if !departures.insert((node, direction)) {
                    return Err(NavError::Scenario(format!(
                        "two paths depart {} heading {}",
                        node, direction
                    )));
                }
            }
        }

        if self.scan_at(self.start.node).is_empty() {
            return Err(NavError::Scenario(format!(
                "start node {} has no paths",
                self.start.node
            )));
        }
        Ok(())
    }
}
