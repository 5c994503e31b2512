//! Core types for the planet-map library.
//!
//! This module provides the fundamental values everything else is built on:
//! - [`Direction`] and [`DirectionSet`]: cardinal headings at a node
//! - [`Node`]: unbounded 2D grid coordinate
//! - [`HalfEdge`], [`NodeEdges`], [`Weight`], [`BLOCKED`]: path storage

mod direction;
mod edge;
mod node;

pub use direction::{Direction, DirectionSet};
pub use edge::{HalfEdge, NodeEdges, Weight, BLOCKED};
pub use node::Node;
