use serde::{Serialize, Deserialize};
use std::{fmt, ops};


/// Struct `Depth` defines the maximal depth of a tree,
/// i.e., the number of internal-node levels that may still be grown.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Depth {
    /// No bound on the depth.
    #[default]
    Unbounded,
    /// At most this many more levels.
    Limited(usize),
}


impl Depth {
    /// Returns `true` if no level may be grown anymore.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Limited(0))
    }
}


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Limited(depth) => write!(f, "{depth}"),
        }
    }
}


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self::Limited(depth)
    }
}


impl From<Option<usize>> for Depth {
    fn from(depth: Option<usize>) -> Self {
        depth.map_or(Self::Unbounded, Self::Limited)
    }
}


impl ops::Sub<usize> for Depth {
    type Output = Self;
    /// Define the subtraction of the `Depth` struct.
    /// The subtraction does not go below `0`,
    /// and an unbounded depth stays unbounded.
    #[inline]
    fn sub(self, other: usize) -> Self::Output {
        match self {
            Self::Unbounded => self,
            Self::Limited(depth) => Self::Limited(depth.saturating_sub(other)),
        }
    }
}
