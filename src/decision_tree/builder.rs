use crate::config::TreeConfig;
use crate::error::Result;
use super::{
    criterion::Criterion,
    dtree::DecisionTree,
    type_and_struct::Depth,
};


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitree::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .criterion(Criterion::Gini)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeBuilder {
    max_depth: Depth,
    criterion: Criterion,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: Depth::Unbounded,
    /// criterion: Criterion::Entropy { base: 2.0 },
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Specify the maximal depth of the tree.
    /// A depth of `0` yields a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth);
        self
    }


    /// Let the tree grow until every leaf is pure
    /// or no split applies.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = Depth::Unbounded;
        self
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Entropy { base: 2.0 }`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Take every parameter from `config`.
    pub fn config(mut self, config: &TreeConfig) -> Self {
        self.criterion = config.criterion;
        self.max_depth = config.max_depth;
        self
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`
    /// and fails if the criterion has an invalid parameter.
    pub fn build(self) -> Result<DecisionTree> {
        self.criterion.validate()?;
        Ok(DecisionTree::new(self.criterion, self.max_depth))
    }
}
