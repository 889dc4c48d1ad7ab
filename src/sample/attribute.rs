//! Attribute descriptors and the mask of still-usable attributes.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeSet;

use super::value::Value;


/// Describes a column of the condition vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    /// A categorical column. Nodes test it by equality.
    Discrete {
        /// The legal values of the column.
        values: BTreeSet<Value>,
    },
    /// An ordered column. Nodes test it by a threshold.
    Numeric,
}


impl Attribute {
    /// Construct a discrete attribute over the given domain.
    pub fn discrete<I, V>(values: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<Value>,
    {
        let values = values.into_iter()
            .map(Into::into)
            .collect();
        Self::Discrete { values }
    }


    /// Construct a numeric attribute.
    #[inline]
    pub fn numeric() -> Self {
        Self::Numeric
    }


    /// Returns `true` if this attribute is discrete.
    #[inline]
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Discrete { .. })
    }


    /// Returns `true` if this attribute is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric)
    }


    /// Returns the domain of a discrete attribute.
    #[inline]
    pub fn values(&self) -> Option<&BTreeSet<Value>> {
        match self {
            Self::Discrete { values } => Some(values),
            Self::Numeric => None,
        }
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete { values } => {
                write!(f, "discrete({} values)", values.len())
            },
            Self::Numeric => write!(f, "numeric"),
        }
    }
}


/// A read-only view over the attribute list together with
/// the set of attributes that may still be chosen for a split.
///
/// The caller's list is never modified.
/// [`AttributeMask::with_disabled`] returns a new mask,
/// so sibling subtrees never share an enablement list.
#[derive(Debug, Clone)]
pub struct AttributeMask<'a> {
    attributes: &'a [Attribute],
    enabled:    FixedBitSet,
}


impl<'a> AttributeMask<'a> {
    /// Construct a mask where every attribute is enabled.
    pub fn new(attributes: &'a [Attribute]) -> Self {
        let mut enabled = FixedBitSet::with_capacity(attributes.len());
        enabled.insert_range(..);
        Self { attributes, enabled }
    }


    /// Construct a mask from explicit flags.
    /// Attributes beyond the end of `flags` are disabled.
    pub fn from_flags(attributes: &'a [Attribute], flags: &[bool]) -> Self {
        let mut enabled = FixedBitSet::with_capacity(attributes.len());
        flags.iter()
            .take(attributes.len())
            .enumerate()
            .filter(|&(_, &on)| on)
            .for_each(|(i, _)| enabled.insert(i));
        Self { attributes, enabled }
    }


    /// Returns a copy of this mask with the `i`-th attribute disabled.
    pub fn with_disabled(&self, i: usize) -> Self {
        let mut enabled = self.enabled.clone();
        if i < self.attributes.len() {
            enabled.set(i, false);
        }
        Self { attributes: self.attributes, enabled }
    }


    /// Returns `true` if the `i`-th attribute is enabled.
    #[inline]
    pub fn is_enabled(&self, i: usize) -> bool {
        self.enabled.contains(i)
    }


    /// Returns `true` if at least one attribute is enabled.
    #[inline]
    pub fn has_enabled(&self) -> bool {
        self.enabled.count_ones(..) > 0
    }


    /// Iterates over the enabled attributes, left to right.
    pub fn enabled(&self) -> impl Iterator<Item = (usize, &'a Attribute)> + '_ {
        let attributes = self.attributes;
        self.enabled.ones()
            .map(move |i| (i, &attributes[i]))
    }


    /// Returns the underlying attribute list.
    #[inline]
    pub fn attributes(&self) -> &'a [Attribute] {
        self.attributes
    }
}
