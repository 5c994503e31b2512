//! Error types for planet-map

use thiserror::Error;

use crate::core::{Node, Weight};

/// Errors raised by map and exploration operations.
///
/// Only genuine caller bugs live here. "Unreachable" and "already at the
/// target" are ordinary routing outcomes and stay in the return types
/// (`None` and an empty path), never in this enum.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// An operation referenced a node the relevant table has never seen.
    /// Usually a sign the surrounding loop applied records out of order.
    #[error("node {node} is not known to the map")]
    NodeUnknown { node: Node },

    /// A path weight of zero was supplied; weights are -1 or positive.
    #[error("invalid path weight {weight}")]
    InvalidWeight { weight: Weight },
}

pub type Result<T> = std::result::Result<T, MapError>;
