//! Routing integration tests over the reference planet.
//!
//! These check the outward routing contract: exact routes where the optimum
//! is unique, membership among the optimal candidates where it is not, and
//! the empty-path / unreachable distinction.

mod common;

use common::{node, reference_planet, step};
use planet_map::{Direction, HalfEdge, PlanetMap, Step};
use Direction::{East, North, South, West};

/// Assert the resolved edges at one node, in N, E, S, W order.
fn assert_edges(
    planet: &PlanetMap,
    at: (i32, i32),
    expected: &[(Direction, (i32, i32), Direction, i32)],
) {
    let stored: Vec<(Direction, HalfEdge)> = planet
        .node_edges(node(at.0, at.1))
        .unwrap_or_else(|| panic!("missing node {at:?}"))
        .iter()
        .collect();
    let wanted: Vec<(Direction, HalfEdge)> = expected
        .iter()
        .map(|&(direction, (tx, ty), arrival, weight)| {
            (direction, HalfEdge::new(node(tx, ty), arrival, weight))
        })
        .collect();
    assert_eq!(stored, wanted, "edges at {at:?}");
}

#[test]
fn test_integrity() {
    let planet = reference_planet();
    assert_eq!(planet.node_count(), 14);

    assert_edges(
        &planet,
        (0, 0),
        &[
            (North, (0, 2), South, 2),
            (East, (3, 0), West, 3),
            (South, (0, -1), North, 1),
        ],
    );
    assert_edges(
        &planet,
        (0, 2),
        &[(East, (2, 2), West, 2), (South, (0, 0), North, 2)],
    );
    assert_edges(
        &planet,
        (0, -1),
        &[(North, (0, 0), South, 1), (East, (5, -1), West, -1)],
    );
    assert_edges(
        &planet,
        (2, 2),
        &[
            (East, (4, 2), West, 2),
            (South, (2, 1), North, 1),
            (West, (0, 2), East, 2),
        ],
    );
    assert_edges(
        &planet,
        (2, 1),
        &[
            (North, (2, 2), South, 1),
            (East, (4, 1), West, 2),
            (South, (3, 0), North, 2),
        ],
    );
    assert_edges(
        &planet,
        (4, 1),
        &[
            (North, (4, 2), South, 1),
            (East, (5, 1), West, 1),
            (West, (2, 1), East, 2),
        ],
    );
    assert_edges(
        &planet,
        (4, 2),
        &[
            (East, (5, 0), East, 8),
            (South, (4, 1), North, 1),
            (West, (2, 2), East, 2),
        ],
    );
    assert_edges(&planet, (5, 1), &[(West, (4, 1), East, 1)]);
    assert_edges(
        &planet,
        (3, 0),
        &[
            (North, (2, 1), South, 2),
            (East, (5, 0), West, 2),
            (West, (0, 0), East, 3),
        ],
    );
    assert_edges(
        &planet,
        (5, 0),
        &[
            (East, (4, 2), East, 8),
            (South, (5, -1), North, 1),
            (West, (3, 0), East, 2),
        ],
    );
    assert_edges(
        &planet,
        (5, -1),
        &[(North, (5, 0), South, 1), (West, (0, -1), East, -1)],
    );
    assert_edges(
        &planet,
        (6, -1),
        &[(North, (6, 0), South, 1), (East, (7, 0), South, 3)],
    );
    assert_edges(
        &planet,
        (6, 0),
        &[(East, (7, 0), West, 1), (South, (6, -1), North, 1)],
    );
    assert_edges(
        &planet,
        (7, 0),
        &[(South, (6, -1), East, 3), (West, (6, 0), East, 1)],
    );
}

#[test]
fn test_empty_planet() {
    assert!(PlanetMap::new().paths().is_empty());
}

#[test]
fn test_already_at_target() {
    let planet = reference_planet();
    assert_eq!(planet.shortest_path(node(0, 0), node(0, 0)), Some(vec![]));
}

#[test]
fn test_target() {
    let planet = reference_planet();

    // Includes a blocked path that must not be taken
    assert_eq!(
        planet.shortest_path(node(0, -1), node(5, 0)),
        Some(vec![step(0, -1, North), step(0, 0, East), step(3, 0, East)])
    );

    // Chooses the shorter of two options
    assert_eq!(
        planet.shortest_path(node(2, 2), node(3, 0)),
        Some(vec![step(2, 2, South), step(2, 1, South)])
    );

    // A way with more nodes wins when it is cheaper than the direct edge;
    // two equal-cost candidates exist.
    let route = planet.shortest_path(node(5, 0), node(4, 2)).unwrap();
    let candidates: [Vec<Step>; 2] = [
        vec![
            step(5, 0, West),
            step(3, 0, North),
            step(2, 1, East),
            step(4, 1, North),
        ],
        vec![
            step(5, 0, West),
            step(3, 0, North),
            step(2, 1, North),
            step(2, 2, East),
        ],
    ];
    assert!(
        candidates.contains(&route),
        "route {route:?} is not an optimal candidate"
    );
}

#[test]
fn test_reversed_path() {
    // Only one shortest path exists here, in both directions
    let planet = reference_planet();
    assert_eq!(
        planet.shortest_path(node(5, -1), node(2, 1)),
        Some(vec![step(5, -1, North), step(5, 0, West), step(3, 0, North)])
    );
    assert_eq!(
        planet.shortest_path(node(2, 1), node(5, -1)),
        Some(vec![step(2, 1, South), step(3, 0, East), step(5, 0, South)])
    );
}

#[test]
fn test_blocked_path_forces_detour() {
    let planet = reference_planet();
    // The direct southern edge is blocked; the only optimum runs over the top
    assert_eq!(
        planet.shortest_path(node(0, -1), node(5, -1)),
        Some(vec![
            step(0, -1, North),
            step(0, 0, East),
            step(3, 0, East),
            step(5, 0, South),
        ])
    );
}

#[test]
fn test_target_not_reachable() {
    let planet = reference_planet();
    // Target outside the known map
    assert_eq!(planet.shortest_path(node(5, -1), node(5, 2)), None);
    // Target on the disconnected island
    assert_eq!(planet.shortest_path(node(6, -1), node(5, -1)), None);
}

#[test]
fn test_start_unknown() {
    let planet = reference_planet();
    assert_eq!(planet.shortest_path(node(-2, 0), node(-1, 0)), None);
}

#[test]
fn test_same_length() {
    // Three equal-cost routes exist; any of them is a valid answer
    let planet = reference_planet();
    let route = planet.shortest_path(node(0, 0), node(4, 1)).unwrap();
    let candidates: [Vec<Step>; 3] = [
        vec![
            step(0, 0, North),
            step(0, 2, East),
            step(2, 2, East),
            step(4, 2, South),
        ],
        vec![
            step(0, 0, North),
            step(0, 2, East),
            step(2, 2, South),
            step(2, 1, East),
        ],
        vec![step(0, 0, East), step(3, 0, North), step(2, 1, East)],
    ];
    assert!(
        candidates.contains(&route),
        "route {route:?} is not an optimal candidate"
    );
}

#[test]
fn test_routes_are_reproducible() {
    let planet = reference_planet();
    let first = planet.shortest_path(node(0, 0), node(4, 1));
    for _ in 0..32 {
        assert_eq!(planet.shortest_path(node(0, 0), node(4, 1)), first);
    }
}

#[test]
fn test_target_with_loop() {
    // The outer weight-8 edge closes a cycle; search must still terminate
    // and find the nearby target.
    let planet = reference_planet();
    assert!(planet.shortest_path(node(2, 2), node(5, 1)).is_some());
}

#[test]
fn test_target_not_reachable_with_loop() {
    let planet = reference_planet();
    // The island cycle must not trap the search
    assert_eq!(planet.shortest_path(node(6, -1), node(5, -1)), None);
    assert_eq!(planet.shortest_path(node(0, 0), node(7, 0)), None);
}

#[test]
fn test_curled_planet() {
    // A node connected to itself through two exits
    let mut planet = PlanetMap::new();
    planet.add_path((node(0, 0), North), (node(0, 1), South), 1);
    planet.add_path((node(0, 1), West), (node(0, 0), West), 1);

    assert_eq!(planet.shortest_path(node(0, 0), node(1, 2)), None);
    assert_eq!(
        planet.shortest_path(node(0, 0), node(0, 1)),
        Some(vec![step(0, 0, North)])
    );
}
