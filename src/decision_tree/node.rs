//! A node struct used in the decision tree algorithm.
use std::fmt;
use std::collections::BTreeMap;

use crate::error::{Result, TreeError};
use crate::sample::Value;
use super::split_rule::{LeftRight, Splitter};


/// A node of a decision tree.
/// Nodes are built once by the tree builder and never modified.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A terminal node holding the predicted label.
    Leaf {
        /// The predicted label.
        decision: Value,
    },
    /// Tests a discrete feature by equality.
    /// There is one child per value observed during training,
    /// and no default child.
    Equality {
        /// Index of the tested feature.
        feature:  usize,
        /// The child for each observed value.
        children: BTreeMap<Value, Box<Node>>,
    },
    /// Tests a numeric feature against a threshold.
    Inequality {
        /// The threshold test.
        splitter: Splitter,
        /// The child for values `< threshold`.
        lt:       Box<Node>,
        /// The child for values `>= threshold`.
        gte:      Box<Node>,
    },
}


impl Node {
    /// Construct a leaf node that predicts `decision`.
    #[inline]
    pub fn leaf(decision: Value) -> Self {
        Self::Leaf { decision }
    }


    /// Construct an equality-test node.
    #[inline]
    pub fn equality(feature: usize, children: BTreeMap<Value, Box<Node>>)
        -> Self
    {
        Self::Equality { feature, children }
    }


    /// Construct an inequality-test node.
    #[inline]
    pub fn inequality(splitter: Splitter, lt: Box<Node>, gte: Box<Node>)
        -> Self
    {
        Self::Inequality { splitter, lt, gte }
    }


    /// Walks from this node down to a leaf and returns its label.
    pub fn decide(&self, conditions: &[Value]) -> Result<&Value> {
        match self {
            Self::Leaf { decision } => Ok(decision),
            Self::Equality { feature, children } => {
                let value = conditions.get(*feature)
                    .ok_or(TreeError::FeatureOutOfRange(*feature, conditions.len()))?;
                let child = children.get(value)
                    .ok_or_else(|| TreeError::UnseenCategory {
                        feature: *feature,
                        value:   value.clone(),
                    })?;
                child.decide(conditions)
            },
            Self::Inequality { splitter, lt, gte } => {
                match splitter.split(conditions)? {
                    LeftRight::Left  => lt.decide(conditions),
                    LeftRight::Right => gte.decide(conditions),
                }
            },
        }
    }


    /// Returns the children of this node.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Leaf { .. } => Vec::new(),
            Self::Equality { children, .. } => {
                children.values().map(|child| child.as_ref()).collect()
            },
            Self::Inequality { lt, gte, .. } => vec![lt.as_ref(), gte.as_ref()],
        }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the number of internal-node levels below and including
    /// this node. A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            _ => self.children()
                .into_iter()
                .map(Node::n_leaves)
                .sum(),
        }
    }


    pub(crate) fn write_indented(
        &self,
        f:     &mut fmt::Formatter<'_>,
        names: &[String],
        level: usize,
    ) -> fmt::Result
    {
        let indent = "    ".repeat(level);
        match self {
            Self::Leaf { decision } => {
                writeln!(f, "{indent}=> {decision}")
            },
            Self::Equality { feature, children } => {
                let name = feature_name(names, *feature);
                for (value, child) in children {
                    writeln!(f, "{indent}{name} == {value}:")?;
                    child.write_indented(f, names, level + 1)?;
                }
                Ok(())
            },
            Self::Inequality { splitter, lt, gte } => {
                let name = feature_name(names, splitter.feature);
                writeln!(f, "{indent}{name} < {}:", splitter.threshold)?;
                lt.write_indented(f, names, level + 1)?;
                writeln!(f, "{indent}{name} >= {}:", splitter.threshold)?;
                gte.write_indented(f, names, level + 1)
            },
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize, names: &[String])
        -> (Vec<String>, usize)
    {
        match self {
            Self::Inequality { splitter, lt, gte } => {
                let test = format!(
                    "\tnode_{id} [ label = \"{feat} < {thr:.2} ?\" ];\n",
                    feat = feature_name(names, splitter.feature),
                    thr  = splitter.threshold,
                );

                let lt_id = id + 1;
                let (mut info, gte_id) = lt.to_dot_info(lt_id, names);
                let (mut gte, return_id) = gte.to_dot_info(gte_id, names);

                info.push(test);
                info.append(&mut gte);

                info.push(format!(
                    "\tnode_{id} -- node_{lt_id} [ label = \"Yes\" ];\n",
                ));
                info.push(format!(
                    "\tnode_{id} -- node_{gte_id} [ label = \"No\" ];\n",
                ));

                (info, return_id)
            },
            Self::Equality { feature, children } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feat} = ?\" ];\n",
                    feat = feature_name(names, *feature),
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, return_id) = child.to_dot_info(child_id, names);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
            Self::Leaf { decision } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{decision}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, &[], 0)
    }
}


fn feature_name(names: &[String], feature: usize) -> String {
    names.get(feature)
        .cloned()
        .unwrap_or_else(|| format!("x[{feature}]"))
}
