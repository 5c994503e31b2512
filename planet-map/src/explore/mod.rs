//! Exploration decisions on top of map and routing.

mod decision;

pub use decision::DecisionEngine;
