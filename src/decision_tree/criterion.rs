use log::trace;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::constants::DEFAULT_ENTROPY_BASE;
use crate::error::{Result, TreeError};
use crate::sample::{Attribute, AttributeMask, Record, Value};
use super::measure::*;
use super::split_rule::*;


/// Splitting criteria for growing decision tree.
/// * `Criterion::Entropy` measures the entropy of the label distribution
///     in the given base.
/// * `Criterion::Gini` measures the Gini index of the label distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Criterion {
    /// Entropy function.
    Entropy {
        /// Base of the logarithm.
        base: f64,
    },
    /// Gini index.
    Gini,
}


impl Default for Criterion {
    fn default() -> Self {
        Self::entropy()
    }
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy { base } => write!(f, "Entropy (base {base})"),
            Self::Gini => write!(f, "Gini index"),
        }
    }
}


impl Criterion {
    /// Binary entropy.
    #[inline]
    pub fn entropy() -> Self {
        Self::Entropy { base: DEFAULT_ENTROPY_BASE }
    }


    /// Checks the parameters of the criterion.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Entropy { base }
                if !base.is_finite() || *base <= 0.0 || *base == 1.0 =>
            {
                Err(TreeError::InvalidParameter(
                    "entropy base".to_string(),
                    "a positive finite number other than 1".to_string(),
                    base.to_string(),
                ))
            },
            _ => Ok(()),
        }
    }


    /// Returns the impurity of the given labels.
    pub fn measure<'a, I>(&self, labels: I) -> f64
        where I: IntoIterator<Item = &'a Value>
    {
        let dist = discrete_distribution(labels);
        match self {
            Self::Entropy { base } => distribution_entropy(&dist, *base),
            Self::Gini => distribution_gini(&dist),
        }
    }


    /// Returns the gain of splitting `labels` into `buckets`,
    /// i.e., the impurity of `labels` minus
    /// the (unweighted) sum of the impurities of `buckets`.
    pub fn gain<'a, L, B, I>(&self, labels: L, buckets: B) -> f64
        where L: IntoIterator<Item = &'a Value>,
              B: IntoIterator<Item = I>,
              I: IntoIterator<Item = &'a Value>,
    {
        buckets.into_iter()
            .fold(self.measure(labels), |gain, bucket| gain - self.measure(bucket))
    }


    /// Returns the gain of `partition` over `records`.
    pub fn partition_gain(&self, records: &[&Record], partition: &Partition<'_>)
        -> f64
    {
        let buckets = partition.buckets();
        self.gain(
            records.iter().map(|r| r.label()),
            buckets.iter().map(|bucket| bucket.iter().map(|r| r.label())),
        )
    }


    /// Returns the best split of `records` among the enabled attributes.
    ///
    /// The candidates are visited attribute by attribute from left to right.
    /// A discrete attribute yields one candidate that groups the records
    /// by value.
    /// A numeric attribute yields one cut `(< v, >= v)` for each
    /// distinct value `v` in ascending order;
    /// cuts with an empty side are skipped.
    /// The candidate with the largest gain wins,
    /// and the first one visited wins a tie.
    ///
    /// Returns `Ok(None)` if no candidate exists.
    pub fn best_split<'a>(
        &self,
        records: &[&'a Record],
        mask:    &AttributeMask<'_>,
    ) -> Result<Option<BestSplit<'a>>>
    {
        if !mask.has_enabled() {
            return Err(TreeError::NoUsableAttribute);
        }

        let mut best: Option<BestSplit<'a>> = None;
        for (feature, attribute) in mask.enabled() {
            match attribute {
                Attribute::Discrete { .. } => {
                    let partition = Partition::by_value(records, feature)?;
                    self.challenge(records, partition, &mut best);
                },
                Attribute::Numeric => {
                    let mut cuts = records.iter()
                        .map(|r| numeric_at(r.conditions(), feature))
                        .collect::<Result<Vec<_>>>()?;
                    cuts.sort_by(f64::total_cmp);
                    cuts.dedup();

                    for threshold in cuts {
                        let partition = Partition::by_cut(
                            records, feature, threshold
                        )?;
                        if partition.is_degenerate() { continue; }
                        self.challenge(records, partition, &mut best);
                    }
                },
            }
        }
        Ok(best)
    }


    /// Replaces `best` by `partition` if `partition` has a strictly
    /// larger gain.
    #[inline]
    fn challenge<'a>(
        &self,
        records:   &[&'a Record],
        partition: Partition<'a>,
        best:      &mut Option<BestSplit<'a>>,
    )
    {
        let gain = self.partition_gain(records, &partition);
        trace!(
            "candidate on feature {} scores {gain:.6}",
            partition.feature()
        );

        if best.as_ref().map_or(true, |b| gain > b.gain) {
            *best = Some(BestSplit { partition, gain });
        }
    }
}
