/*!
# Node Representation

We choose `NodeId = u32` as almost all use-cases involve far less than `2^32` nodes.
Ids are *keys*, not indices: a graph may hold any set of ids, with gaps, in any order.
Every node additionally carries a spatial [`Position`] used by external plotting tools.
*/

use std::{fmt, num::ParseFloatError, str::FromStr};

use rand::Rng;
use thiserror::Error;

/// Nodes are identified by arbitrary unsigned integer keys
pub type NodeId = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = NodeId;

/// Spatial position of a node given as `(x, y, z)` coordinates.
///
/// Positions format as `x,y,z` and parse back from the same text form:
/// ```
/// use wgraphs::prelude::*;
///
/// let pos: Position = "35.1,32.09,0".parse().unwrap();
/// assert_eq!(pos, Position(35.1, 32.09, 0.0));
/// assert_eq!(pos.to_string(), "35.1,32.09,0");
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Position(pub f64, pub f64, pub f64);

impl Position {
    /// Lower `(x, y)` corner of the default placement box
    pub const BOX_MIN: (f64, f64) = (35.0, 32.09);

    /// Upper `(x, y)` corner of the default placement box
    pub const BOX_MAX: (f64, f64) = (35.3, 32.11);

    /// Samples a position uniformly from the default placement box at `z = 0`.
    ///
    /// This is the placement used whenever a node is created without an
    /// explicit position.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Position(
            rng.random_range(Self::BOX_MIN.0..Self::BOX_MAX.0),
            rng.random_range(Self::BOX_MIN.1..Self::BOX_MAX.1),
            0.0,
        )
    }

    /// `x` coordinate
    pub fn x(&self) -> f64 {
        self.0
    }

    /// `y` coordinate
    pub fn y(&self) -> f64 {
        self.1
    }

    /// `z` coordinate
    pub fn z(&self) -> f64 {
        self.2
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// Error when parsing a [`Position`] from its `x,y,z` text form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsePositionError {
    /// The string did not consist of exactly three comma separated values
    #[error("expected three comma separated coordinates, found {0}")]
    WrongArity(usize),
    /// A coordinate was not a valid float
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseFloatError),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|c| c.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()?;
        match coords[..] {
            [x, y, z] => Ok(Position(x, y, z)),
            _ => Err(ParsePositionError::WrongArity(coords.len())),
        }
    }
}
