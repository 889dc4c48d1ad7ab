//! The prediction side of the train/predict boundary.
use crate::error::Result;
use crate::sample::{Sample, Value};


/// A trait that defines the behavior of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of the given condition vector.
    fn predict(&self, conditions: &[Value]) -> Result<Value>;


    /// Predicts the labels of every record of `sample`.
    /// Stops at the first record that cannot be classified.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<Value>> {
        sample.records()
            .iter()
            .map(|record| self.predict(record.conditions()))
            .collect()
    }
}
