//! A labeled example.
use serde::{Serialize, Deserialize};

use crate::error::{Result, TreeError};
use super::value::Value;


/// A pair of a condition vector and a decision vector.
/// The first decision value is the label the tree learns;
/// the remaining decision values are carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    conditions: Vec<Value>,
    decisions:  Vec<Value>,
}


impl Record {
    /// Construct a record with a single decision value.
    pub fn new<L>(conditions: Vec<Value>, label: L) -> Self
        where L: Into<Value>
    {
        Self { conditions, decisions: vec![label.into()] }
    }


    /// Construct a record from a full decision vector.
    /// Fails if `decisions` is empty.
    pub fn with_decisions(conditions: Vec<Value>, decisions: Vec<Value>)
        -> Result<Self>
    {
        if decisions.is_empty() {
            return Err(TreeError::MissingDecision);
        }
        Ok(Self { conditions, decisions })
    }


    /// Returns the condition vector.
    #[inline]
    pub fn conditions(&self) -> &[Value] {
        &self.conditions[..]
    }


    /// Returns the decision vector.
    #[inline]
    pub fn decisions(&self) -> &[Value] {
        &self.decisions[..]
    }


    /// Returns the label, i.e., the first decision value.
    #[inline]
    pub fn label(&self) -> &Value {
        &self.decisions[0]
    }


    /// Returns the `i`-th condition value.
    #[inline]
    pub fn condition(&self, i: usize) -> Result<&Value> {
        self.conditions.get(i)
            .ok_or(TreeError::FeatureOutOfRange(i, self.conditions.len()))
    }
}


/// The serialized shape of a [`Record`], checked before use.
#[derive(Deserialize)]
struct RawRecord {
    conditions: Vec<Value>,
    decisions:  Vec<Value>,
}


impl TryFrom<RawRecord> for Record {
    type Error = TreeError;
    fn try_from(raw: RawRecord) -> Result<Self> {
        Self::with_decisions(raw.conditions, raw.decisions)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_decisions_rejected() {
        let res = Record::with_decisions(vec![Value::from(1.0)], Vec::new());
        assert!(matches!(res, Err(TreeError::MissingDecision)));
    }

    #[test]
    fn test_label_is_first_decision() {
        let record = Record::with_decisions(
            vec![Value::from(1.0)],
            vec![Value::from("A"), Value::from("unused")],
        ).unwrap();
        assert_eq!(&Value::from("A"), record.label());
        assert_eq!(2, record.decisions().len());
    }

    #[test]
    fn test_deserialize_checks_decisions() {
        let res = serde_json::from_str::<Record>(
            r#"{"conditions":[{"Number":1.0}],"decisions":[]}"#
        );
        let err = res.unwrap_err();
        assert!(err.to_string().contains("at least one decision"), "got {err}");

        let record = serde_json::from_str::<Record>(
            r#"{"conditions":[{"Number":1.0}],"decisions":[{"Text":"A"}]}"#
        ).unwrap();
        assert_eq!(&Value::from("A"), record.label());
    }

    #[test]
    fn test_condition_out_of_range() {
        let record = Record::new(vec![Value::from(1.0)], "A");
        assert!(matches!(
            record.condition(3),
            Err(TreeError::FeatureOutOfRange(3, 1))
        ));
    }
}
