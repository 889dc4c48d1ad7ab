//! Exports the decision tree learner, its data model and traits.
//!
pub use crate::sample::{
    // Data model
    Attribute,
    AttributeMask,
    Record,
    Sample,
    SampleReader,
    Value,
};


pub use crate::decision_tree::{
    // Tree induction
    Criterion,
    Depth,
    DecisionTree,
    DecisionTreeBuilder,


    // Tree representation
    DecisionTreeClassifier,
    Node,
};


pub use crate::learner::Learner;
pub use crate::classifier::Classifier;
pub use crate::config::TreeConfig;
pub use crate::error::TreeError;
