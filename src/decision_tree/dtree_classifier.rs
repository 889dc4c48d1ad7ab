//! Defines the decision tree classifier.
use crate::classifier::Classifier;
use crate::error::Result;
use crate::sample::Value;

use super::criterion::Criterion;
use super::node::Node;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::{BufWriter, prelude::*};


/// Decision tree classifier.
/// This struct owns the root [`Node`]
/// together with the criterion it was grown with
/// and the feature names used when rendering it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    root:      Node,
    criterion: Criterion,
    names:     Vec<String>,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn new(root: Node, criterion: Criterion, names: Vec<String>)
        -> Self
    {
        Self { root, criterion, names }
    }


    /// Returns the label of the leaf that `conditions` reaches.
    #[inline]
    pub fn decide(&self, conditions: &[Value]) -> Result<&Value> {
        self.root.decide(conditions)
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the criterion the tree was grown with.
    #[inline]
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }


    /// Returns the feature names.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0, &self.names).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()?;

        Ok(())
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, conditions: &[Value]) -> Result<Value> {
        self.decide(conditions).cloned()
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_indented(f, &self.names, 0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn classifier() -> DecisionTreeClassifier {
        let mut children = BTreeMap::new();
        children.insert(Value::from("Y"), Box::new(Node::leaf(Value::from("yes"))));
        children.insert(Value::from("N"), Box::new(Node::leaf(Value::from("no"))));
        let root = Node::equality(0, children);
        DecisionTreeClassifier::new(
            root, Criterion::Gini, vec!["outlook".to_string()]
        )
    }

    #[test]
    fn test_display_uses_names() {
        let rendered = classifier().to_string();
        assert_eq!("outlook == N:\n    => no\noutlook == Y:\n    => yes\n", rendered);
    }

    #[test]
    fn test_predict_clones_label() {
        let f = classifier();
        assert_eq!(Value::from("yes"), f.predict(&[Value::from("Y")]).unwrap());
        assert!(f.predict(&[Value::from("M")]).is_err());
    }

    #[test]
    fn test_dot_file() {
        let path = std::env::temp_dir().join("minitree_dtree_classifier.dot");
        classifier().to_dot_file(&path).unwrap();
        let dot = std::fs::read_to_string(&path).unwrap();
        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.contains("outlook = ?"));
        assert!(dot.trim_end().ends_with('}'));
        let _ = std::fs::remove_file(&path);
    }
}
