//! # Planet-Map: incremental planet graph with online routing
//!
//! A library for exploring a grid planet one node at a time. The map grows
//! message by message: paths arrive as bidirectional weighted reports, scans
//! declare which exits physically exist at a node, and routing runs over
//! whatever is known so far. On top of that sits a decision engine that
//! picks, at every node, between exploring an unknown exit and heading for
//! a target by the cheapest known route.
//!
//! ## Quick Start
//!
//! ```rust
//! use planet_map::{DecisionEngine, Direction, Node, PlanetMap};
//!
//! let mut planet = PlanetMap::new();
//! planet.add_path(
//!     (Node::new(0, 0), Direction::North),
//!     (Node::new(0, 2), Direction::South),
//!     2,
//! );
//! planet.set_available_node_directions(
//!     Node::new(0, 0),
//!     [Direction::North, Direction::East].into_iter().collect(),
//! );
//!
//! // Seeded, so exploration decisions replay in tests
//! let mut engine = DecisionEngine::new(7);
//! let heading = engine.next_direction(&planet, Node::new(0, 0), None)?;
//! assert_eq!(heading, Some(Direction::East)); // the unexplored exit
//! # Ok::<(), planet_map::MapError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: value types ([`Node`], [`Direction`], half-edge storage)
//! - [`planet`]: the [`PlanetMap`] store fed by path and scan reports
//! - [`query`]: Dijkstra routing to a target or to the nearest frontier
//! - [`explore`]: the [`DecisionEngine`] choosing the next heading
//! - [`records`]: typed records handed over by the message layer
//!
//! ## Data Flow
//!
//! ```text
//!  message layer ──records──► PlanetMap ◄──reads── query::search
//!                                 ▲                     ▲
//!                                 │                     │
//!                            mission loop ────► DecisionEngine
//! ```
//!
//! The flow is one-way: ingestion mutates the map, then the decision engine
//! reads it. Nothing here blocks or talks back to the transport.

pub mod core;
pub mod error;
pub mod explore;
pub mod planet;
pub mod query;
pub mod records;

// Re-export the main types at crate root
pub use crate::core::{Direction, DirectionSet, HalfEdge, Node, NodeEdges, Weight, BLOCKED};
pub use crate::error::{MapError, Result};
pub use crate::explore::DecisionEngine;
pub use crate::planet::PlanetMap;
pub use crate::query::{RouteGoal, Step};
pub use crate::records::{Applied, PathStatus, Record};
