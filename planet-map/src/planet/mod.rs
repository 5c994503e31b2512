//! The planet map store.

mod map;

pub use map::PlanetMap;
