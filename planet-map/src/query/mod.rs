//! Route queries over the planet map.

mod dijkstra;

pub use dijkstra::{search, RouteGoal, Step};
