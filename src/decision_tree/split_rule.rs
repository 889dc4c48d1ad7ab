//! This file defines split rules for decision tree.
use std::collections::BTreeMap;

use crate::error::{Result, TreeError};
use crate::sample::{Record, Value};


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// The value is less than the threshold.
    Left,
    /// The value is greater than or equal to the threshold.
    Right,
}


/// A threshold test on a numeric feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Splitter {
    /// Index of the tested feature.
    pub feature:   usize,
    /// Cut value.
    pub threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold }
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, conditions: &[Value]) -> Result<LeftRight> {
        let value = numeric_at(conditions, self.feature)?;

        if value < self.threshold { Ok(LeftRight::Left) } else { Ok(LeftRight::Right) }
    }
}


/// A partition of the records reaching a node.
#[derive(Debug, Clone)]
pub enum Partition<'a> {
    /// One bucket per observed value of a discrete feature.
    ByValue {
        /// Index of the tested feature.
        feature: usize,
        /// Records grouped by their value.
        buckets: BTreeMap<Value, Vec<&'a Record>>,
    },
    /// The records below and above a threshold.
    Cut {
        /// The threshold test.
        splitter: Splitter,
        /// Records with value `< threshold`.
        lt:       Vec<&'a Record>,
        /// Records with value `>= threshold`.
        gte:      Vec<&'a Record>,
    },
}


impl<'a> Partition<'a> {
    /// Groups `records` by the literal value of `feature`.
    pub fn by_value(records: &[&'a Record], feature: usize) -> Result<Self> {
        let mut buckets: BTreeMap<Value, Vec<&'a Record>> = BTreeMap::new();
        for &record in records {
            let value = record.condition(feature)?;
            buckets.entry(value.clone())
                .or_default()
                .push(record);
        }
        Ok(Self::ByValue { feature, buckets })
    }


    /// Splits `records` into `< threshold` and `>= threshold`
    /// on `feature`.
    pub fn by_cut(records: &[&'a Record], feature: usize, threshold: f64)
        -> Result<Self>
    {
        let splitter = Splitter::new(feature, threshold);
        let mut lt  = Vec::new();
        let mut gte = Vec::new();
        for &record in records {
            match splitter.split(record.conditions())? {
                LeftRight::Left  => { lt.push(record); },
                LeftRight::Right => { gte.push(record); },
            }
        }
        Ok(Self::Cut { splitter, lt, gte })
    }


    /// Returns the index of the tested feature.
    #[inline]
    pub fn feature(&self) -> usize {
        match self {
            Self::ByValue { feature, .. } => *feature,
            Self::Cut { splitter, .. } => splitter.feature,
        }
    }


    /// Returns the buckets of this partition.
    pub fn buckets(&self) -> Vec<&[&'a Record]> {
        match self {
            Self::ByValue { buckets, .. } => {
                buckets.values()
                    .map(|bucket| &bucket[..])
                    .collect()
            },
            Self::Cut { lt, gte, .. } => vec![&lt[..], &gte[..]],
        }
    }


    /// Returns `true` if some side of a cut is empty.
    /// A value partition is never degenerate.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::ByValue { .. } => false,
            Self::Cut { lt, gte, .. } => lt.is_empty() || gte.is_empty(),
        }
    }
}


/// The winning partition of a node together with its gain.
#[derive(Debug, Clone)]
pub struct BestSplit<'a> {
    /// The chosen partition.
    pub partition: Partition<'a>,
    /// The gain of the chosen partition.
    pub gain:      f64,
}


/// Returns the `feature`-th value of `conditions` as a number.
#[inline]
pub(crate) fn numeric_at(conditions: &[Value], feature: usize) -> Result<f64> {
    let value = conditions.get(feature)
        .ok_or(TreeError::FeatureOutOfRange(feature, conditions.len()))?;
    value.as_number()
        .ok_or_else(|| TreeError::NotNumeric(feature, value.clone()))
}
