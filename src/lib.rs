#![warn(missing_docs)]

//!
//! A crate that induces classification trees from labeled tabular data.
//!
//! The training examples may mix two kinds of attributes.
//!
//! - Discrete attributes
//!     A discrete attribute takes values in a finite domain.
//!     A node that tests a discrete attribute has one child
//!     for each value observed at that node.
//!     Once a discrete attribute is tested,
//!     it is never tested again below that node.
//!
//! - Numeric attributes
//!     A numeric attribute is split by a threshold `v`
//!     into the examples with value `< v` and the ones with value `>= v`.
//!     A numeric attribute may be tested again deeper in the tree
//!     with another threshold.
//!
//! Every split is scored by the impurity reduction
//! measured by a [`Criterion`] (entropy or Gini index).
//!
//! # Example
//! ```no_run
//! use minitree::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("/path/to/data/file.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new()
//!     .criterion(Criterion::Gini)
//!     .max_depth(4)
//!     .build()
//!     .unwrap();
//!
//! let f = tree.produce(&sample).unwrap();
//! let predictions = f.predict_all(&sample).unwrap();
//! ```

pub mod constants;
pub mod error;
pub mod config;
pub mod sample;
pub mod learner;
pub mod classifier;
pub mod decision_tree;
pub mod prelude;


pub use error::{TreeError, Result};
pub use config::TreeConfig;

pub use sample::{
    Attribute,
    AttributeMask,
    Record,
    Sample,
    SampleReader,
    Value,
};

pub use learner::Learner;
pub use classifier::Classifier;

pub use decision_tree::{
    Criterion,
    Depth,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};
