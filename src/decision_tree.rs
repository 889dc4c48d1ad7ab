/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;
mod criterion;
mod measure;
mod split_rule;
mod type_and_struct;


pub use dtree_classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use criterion::Criterion;
pub use node::Node;
pub use type_and_struct::Depth;
pub use split_rule::{
    BestSplit,
    LeftRight,
    Partition,
    Splitter,
};
pub use measure::{entropy, gini};
