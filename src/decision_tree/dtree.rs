use log::{debug, info, warn};

use std::fmt;
use std::collections::BTreeMap;

use crate::error::{Result, TreeError};
use crate::learner::Learner;
use crate::sample::{Attribute, AttributeMask, Record, Sample, Value};

use super::{
    criterion::Criterion,
    node::Node,
    split_rule::Partition,
    type_and_struct::Depth,
    dtree_classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm.
/// Given a set of labeled records over discrete and numeric attributes,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`]
/// under the specified parameters.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::decision_tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let attributes = vec![Attribute::discrete([0.0, 1.0])];
/// let records = vec![
///     Record::new(vec![Value::from(0.0)], "A"),
///     Record::new(vec![Value::from(1.0)], "B"),
/// ];
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .criterion(Criterion::entropy())
///     .build()
///     .unwrap();
///
/// let f = tree.fit(&records, &attributes).unwrap();
/// assert_eq!(&Value::from("B"), f.decide(&[Value::from(1.0)]).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    criterion: Criterion,
    max_depth: Depth,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(criterion: Criterion, max_depth: Depth) -> Self {
        Self { criterion, max_depth, }
    }


    /// Returns the splitting criterion.
    #[inline]
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }


    /// Returns the depth bound.
    #[inline]
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }


    /// Builds a tree from `records` using every attribute.
    /// `records` is collected once before growing starts,
    /// so a one-shot iterator is fine.
    pub fn fit<'a, I>(&self, records: I, attributes: &[Attribute])
        -> Result<DecisionTreeClassifier>
        where I: IntoIterator<Item = &'a Record>
    {
        let mask = AttributeMask::new(attributes);
        self.fit_with_mask(records, &mask)
    }


    /// Builds a tree from `records` using the attributes
    /// enabled in `mask`.
    pub fn fit_with_mask<'a, I>(&self, records: I, mask: &AttributeMask<'_>)
        -> Result<DecisionTreeClassifier>
        where I: IntoIterator<Item = &'a Record>
    {
        let names = (1..=mask.attributes().len())
            .map(|i| format!("Feat. [{i}]"))
            .collect();
        self.fit_named(records, mask, names)
    }


    fn fit_named<'a, I>(
        &self,
        records: I,
        mask:    &AttributeMask<'_>,
        names:   Vec<String>,
    ) -> Result<DecisionTreeClassifier>
        where I: IntoIterator<Item = &'a Record>
    {
        let records = records.into_iter().collect::<Vec<_>>();
        if records.is_empty() {
            return Err(TreeError::EmptyInput);
        }
        let n_sample = records.len();

        let root = self.grow(records, mask, self.max_depth)?;
        info!(
            "grew a tree of depth {} with {} leaves from {n_sample} records ({})",
            root.depth(),
            root.n_leaves(),
            self.criterion,
        );

        Ok(DecisionTreeClassifier::new(root, self.criterion, names))
    }


    /// Grows the sub-tree for `records`.
    ///
    /// A leaf holding the majority label is returned if
    /// the depth budget is exhausted,
    /// every record has the same label,
    /// no attribute is enabled,
    /// or no split candidate exists.
    pub fn grow(
        &self,
        records: Vec<&Record>,
        mask:    &AttributeMask<'_>,
        depth:   Depth,
    ) -> Result<Node>
    {
        let decision = majority_label(&records)
            .ok_or(TreeError::EmptyInput)?;
        let is_pure = records.iter().all(|r| r.label() == decision);

        if depth.is_exhausted() || is_pure || !mask.has_enabled() {
            return Ok(Node::leaf(decision.clone()));
        }

        let best = match self.criterion.best_split(&records, mask)? {
            Some(best) => best,
            None => {
                warn!(
                    "no admissible split for {} records, emitting a leaf",
                    records.len()
                );
                return Ok(Node::leaf(decision.clone()));
            },
        };
        debug!(
            "split {} records on feature {} (gain {:.6})",
            records.len(),
            best.partition.feature(),
            best.gain,
        );

        let depth = depth - 1;
        match best.partition {
            Partition::Cut { splitter, lt, gte } => {
                let lt  = self.grow(lt, mask, depth)?;
                let gte = self.grow(gte, mask, depth)?;
                Ok(Node::inequality(splitter, Box::new(lt), Box::new(gte)))
            },
            Partition::ByValue { feature, buckets } => {
                let mask = mask.with_disabled(feature);
                let children = buckets.into_iter()
                    .map(|(value, bucket)| {
                        let child = self.grow(bucket, &mask, depth)?;
                        Ok((value, Box::new(child)))
                    })
                    .collect::<Result<BTreeMap<_, _>>>()?;
                Ok(Node::equality(feature, children))
            },
        }
    }
}


impl Learner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split criterion", format!("{}", self.criterion)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        let mask = AttributeMask::new(sample.attributes());
        self.fit_named(sample.records(), &mask, sample.names().to_vec())
    }
}


/// Returns the most frequent label of `records`.
/// Among equally frequent labels,
/// the one that appears first in `records` wins.
fn majority_label<'a>(records: &[&'a Record]) -> Option<&'a Value> {
    let mut counter: Vec<(&'a Value, usize)> = Vec::new();
    for record in records {
        let label = record.label();
        match counter.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => { *count += 1; },
            None => { counter.push((label, 1)); },
        }
    }

    let mut best: Option<(&'a Value, usize)> = None;
    for (label, count) in counter {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {}\n\
            - Splitting criterion: {}\n\
            ----------\
            ",
            self.max_depth,
            self.criterion,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> Record {
        Record::new(Vec::new(), label)
    }

    #[test]
    fn test_majority_first_seen_on_tie() {
        let records = [record("B"), record("A"), record("A"), record("B")];
        let refs = records.iter().collect::<Vec<_>>();
        assert_eq!(Some(&Value::from("B")), majority_label(&refs));
    }

    #[test]
    fn test_majority_counts() {
        let records = [record("B"), record("A"), record("A")];
        let refs = records.iter().collect::<Vec<_>>();
        assert_eq!(Some(&Value::from("A")), majority_label(&refs));
    }

    #[test]
    fn test_majority_of_nothing() {
        assert_eq!(None, majority_label(&[]));
    }

    #[test]
    fn test_grow_on_empty_records() {
        let tree = DecisionTree::new(Criterion::Gini, Depth::Unbounded);
        let attributes = vec![Attribute::numeric()];
        let res = tree.fit(&Vec::<Record>::new(), &attributes);
        assert!(matches!(res, Err(TreeError::EmptyInput)));
    }
}
