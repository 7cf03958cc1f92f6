// Definitions that are used throughout all modules

use std::fmt;

use serde::{Deserialize, Serialize};

// Enumeration for dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    _2D,
    _3D,
}

impl Dimension {
    /// Number of basis vectors (and components per vector) in this dimension.
    pub fn rank(&self) -> usize {
        match self {
            Dimension::_2D => 2,
            Dimension::_3D => 3,
        }
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        match rank {
            2 => Some(Dimension::_2D),
            3 => Some(Dimension::_3D),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.rank())
    }
}

// Enumeration to track the space type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    Real,
    Reciprocal,
}
