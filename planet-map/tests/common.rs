//! Test utilities for planet-map integration tests.
//!
//! The reference planet used across routing and exploration tests:
//!
//! ```text
//! (0,2)---2---(2,2)-----2----(4,2)--------------+
//!   |           |              |                |
//!   |           1              1                |
//!   |           |              |                |
//!   2         (2,1)-----2----(4,1)--1--(5,1)    8
//!   |           |                               |
//!   |           2-----+                         |
//!   |                 |                         |
//! (0,0)------3------(3,0)-------2------(5,0)----+  (6,0)--(7,0)
//!   |                                    |           |      |
//!   1                                    1           1      3
//!   |                                    |           |      |
//! (0,-1)---------------- -1------------(5,-1)      (6,-1)---+
//! ```
//!
//! The island around (6,0) is connected internally but unreachable from the
//! rest, and the long southern edge is blocked.

#![allow(dead_code)]

use planet_map::{Direction, DirectionSet, Node, PlanetMap, Step};

pub fn node(x: i32, y: i32) -> Node {
    Node::new(x, y)
}

pub fn step(x: i32, y: i32, direction: Direction) -> Step {
    Step::new(node(x, y), direction)
}

/// Build the reference planet above.
pub fn reference_planet() -> PlanetMap {
    use Direction::{East, North, South, West};

    let mut planet = PlanetMap::new();
    planet.add_path((node(0, 0), North), (node(0, 2), South), 2);
    planet.add_path((node(0, 0), East), (node(3, 0), West), 3);
    planet.add_path((node(0, 0), South), (node(0, -1), North), 1);
    planet.add_path((node(0, 2), East), (node(2, 2), West), 2);
    planet.add_path((node(2, 2), South), (node(2, 1), North), 1);
    planet.add_path((node(2, 2), East), (node(4, 2), West), 2);
    planet.add_path((node(2, 1), East), (node(4, 1), West), 2);
    planet.add_path((node(2, 1), South), (node(3, 0), North), 2);
    planet.add_path((node(4, 2), South), (node(4, 1), North), 1);
    planet.add_path((node(4, 2), East), (node(5, 0), East), 8);
    planet.add_path((node(4, 1), East), (node(5, 1), West), 1);
    planet.add_path((node(3, 0), East), (node(5, 0), West), 2);
    planet.add_path((node(5, 0), South), (node(5, -1), North), 1);
    planet.add_path((node(0, -1), East), (node(5, -1), West), -1);

    planet.add_path((node(6, -1), North), (node(6, 0), South), 1);
    planet.add_path((node(6, -1), East), (node(7, 0), South), 3);
    planet.add_path((node(6, 0), East), (node(7, 0), West), 1);

    planet
}

/// Scan `node` with exactly its resolved directions, marking it completely
/// explored.
pub fn scan_complete(planet: &mut PlanetMap, n: Node) {
    let scanned: DirectionSet = planet
        .node_edges(n)
        .map(|edges| edges.iter().map(|(d, _)| d).collect())
        .unwrap_or_default();
    planet.set_available_node_directions(n, scanned);
}

/// Scan every known node with exactly its resolved directions.
pub fn scan_everything_complete(planet: &mut PlanetMap) {
    let nodes: Vec<Node> = planet.paths().keys().copied().collect();
    for n in nodes {
        scan_complete(planet, n);
    }
}
