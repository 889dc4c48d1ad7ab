//! Defines the cell type of a record.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};


/// A single cell of a record.
/// Both condition values and decision labels are [`Value`]s.
///
/// [`Value`] has a total order:
/// numbers are compared by [`f64::total_cmp`],
/// every number is smaller than every text,
/// and texts are compared lexicographically.
/// This makes a [`Value`] usable as a key of `BTreeMap` and `HashMap`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A nominal value.
    Text(String),
}


impl Value {
    /// Returns the number held by this value, if any.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(*x),
            Self::Text(_) => None,
        }
    }


    /// Returns the text held by this value, if any.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }


    /// Returns `true` if this value is a number.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}


impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}


impl PartialOrd for Value {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(x), Self::Number(y)) => {
                unsigned_zero(*x).total_cmp(&unsigned_zero(*y))
            },
            (Self::Number(_), Self::Text(_))   => Ordering::Less,
            (Self::Text(_),   Self::Number(_)) => Ordering::Greater,
            (Self::Text(s),   Self::Text(t))   => s.cmp(t),
        }
    }
}


impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Number(x) => {
                0u8.hash(state);
                unsigned_zero(*x).to_bits().hash(state);
            },
            Self::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            },
        }
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Number(unsigned_zero(x))
    }
}


/// Maps `-0.0` to `0.0` and leaves every other number as is.
#[inline]
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}


impl From<i64> for Value {
    #[inline]
    fn from(x: i64) -> Self {
        Self::Number(x as f64)
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}


impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
