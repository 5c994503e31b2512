//! The simulated mission loop.
//!
//! Stands in for the physical side of a real mission: the scenario plays
//! the planet, this loop plays the rover. Each round the rover scans the node
//! it is on, asks the decision engine for a heading, and attempts the
//! matching ground-truth path. Free paths move it, blocked paths bounce it
//! back with the dead end recorded, and every outcome lands on the map as
//! the record the real transport layer would have delivered.

use crate::error::{NavError, Result};
use crate::scenario::{Departure, Scenario};
use planet_map::{DecisionEngine, Direction, Node, PathStatus, PlanetMap, Record};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// Why a mission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionOutcome {
    /// No reachable frontier remains.
    ExplorationComplete,
    /// The rover stands on the assigned target.
    TargetReached,
    /// The step limit cut the mission short.
    StepLimit,
}

impl fmt::Display for MissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MissionOutcome::ExplorationComplete => "exploration complete",
            MissionOutcome::TargetReached => "target reached",
            MissionOutcome::StepLimit => "step limit reached",
        };
        write!(f, "{}", text)
    }
}

/// Summary of one mission run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionReport {
    pub outcome: MissionOutcome,
    /// Traversal attempts, bounced ones included.
    pub steps: usize,
    pub nodes_visited: usize,
    pub final_position: Node,
}

/// Replays a scenario through the map and the decision engine.
pub struct Mission {
    scenario: Scenario,
    engine: DecisionEngine,
    target: Option<Node>,
    max_steps: usize,
    map: PlanetMap,
}

impl Mission {
    pub fn new(
        scenario: Scenario,
        engine: DecisionEngine,
        target: Option<Node>,
        max_steps: usize,
    ) -> Self {
        Self {
            scenario,
            engine,
            target,
            max_steps,
            map: PlanetMap::new(),
        }
    }

    /// Drive the rover until it is done.
    pub fn run(mut self) -> Result<MissionReport> {
        let start = self.scenario.start;
        info!("landing at {} facing {}", start.node, start.orientation);
        self.map.apply(Record::Origin {
            node: start.node,
            orientation: start.orientation,
        })?;

        let mut position = start.node;
        let mut visited = HashSet::from([position]);
        let mut steps = 0;

        let outcome = loop {
            if self.target == Some(position) {
                break MissionOutcome::TargetReached;
            }
            if steps >= self.max_steps {
                break MissionOutcome::StepLimit;
            }

            self.scan(position, start.node, start.orientation)?;

            let Some(direction) = self.engine.next_direction(&self.map, position, self.target)?
            else {
                break MissionOutcome::ExplorationComplete;
            };

            position = self.traverse(position, direction)?;
            visited.insert(position);
            steps += 1;
        };

        info!("mission over at {}: {}", position, outcome);
        Ok(MissionReport {
            outcome,
            steps,
            nodes_visited: visited.len(),
            final_position: position,
        })
    }

    /// Scan the current node and put the result on the map.
    ///
    /// At the start node the scanner also sees the sealed entry lane, which
    /// the path list does not carry.
    fn scan(&mut self, position: Node, start: Node, orientation: Direction) -> Result<()> {
        let mut directions = self.scenario.scan_at(position);
        if position == start {
            directions.insert(orientation.opposite());
        }
        self.map.apply(Record::Scan {
            node: position,
            directions,
        })?;
        Ok(())
    }

    /// Attempt the chosen path; a blocked one bounces the rover back.
    fn traverse(&mut self, from: Node, direction: Direction) -> Result<Node> {
        let departure = self.scenario.departure(from, direction).ok_or_else(|| {
            NavError::Scenario(format!("no path leaves {} heading {}", from, direction))
        })?;

        match departure.status {
            PathStatus::Blocked => {
                debug!("path {} {} is blocked, turning back", from, direction);
                // The rover only learns that this exit dead-ends; the far
                // side of the obstacle stays unknown.
                self.map.apply(Record::Edge {
                    start: from,
                    start_direction: direction,
                    end: from,
                    end_direction: direction,
                    status: PathStatus::Blocked,
                    weight: departure.weight,
                })?;
                Ok(from)
            }
            PathStatus::Free => {
                let Departure { to, arrival, .. } = departure;
                debug!("driving {} from {} to {}", direction, from, to);
                self.map.apply(Record::Edge {
                    start: from,
                    start_direction: direction,
                    end: to,
                    end_direction: arrival,
                    status: PathStatus::Free,
                    weight: departure.weight,
                })?;
                Ok(to)
            }
        }
    }
}
