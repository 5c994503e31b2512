//! Cardinal directions on the planet grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compass heading at a node, stored as its bearing in degrees.
///
/// The four values form a cyclic group under addition mod 360, which is all
/// the orientation arithmetic a grid planet needs. Serialized as the bare
/// degree value (0, 90, 180, 270).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum Direction {
    North = 0,
    East = 90,
    South = 180,
    West = 270,
}

impl Direction {
    /// All directions in fixed N, E, S, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bearing in degrees (0, 90, 180, 270).
    #[inline]
    pub fn degrees(self) -> u16 {
        self as u16
    }

    /// The direction 180 degrees away.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Slot index in per-node direction tables (N=0, E=1, S=2, W=3).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Parse a bearing in degrees.
    #[inline]
    pub fn from_degrees(degrees: u16) -> Option<Direction> {
        match degrees {
            0 => Some(Direction::North),
            90 => Some(Direction::East),
            180 => Some(Direction::South),
            270 => Some(Direction::West),
            _ => None,
        }
    }

    /// Lowercase name for logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Direction> for u16 {
    #[inline]
    fn from(direction: Direction) -> u16 {
        direction.degrees()
    }
}

impl TryFrom<u16> for Direction {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Direction, Self::Error> {
        Direction::from_degrees(degrees)
            .ok_or_else(|| format!("{degrees} is not a cardinal bearing"))
    }
}

/// Set of directions at one node, packed into a byte.
///
/// Iteration is always in N, E, S, W order regardless of insertion order.
/// Serialized as a list of directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Direction>", into = "Vec<Direction>")]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        Self(0)
    }

    /// Set containing all four directions.
    pub const FULL: DirectionSet = DirectionSet(0b1111);

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.index();
    }

    #[inline]
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !(1 << direction.index());
    }

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    /// Number of directions in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained directions in N, E, S, W order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::new();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl From<Vec<Direction>> for DirectionSet {
    fn from(directions: Vec<Direction>) -> Self {
        directions.into_iter().collect()
    }
}

impl From<DirectionSet> for Vec<Direction> {
    fn from(set: DirectionSet) -> Self {
        set.iter().collect()
    }
}
