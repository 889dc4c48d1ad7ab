//! The training side of the train/predict boundary.
use crate::error::Result;
use crate::sample::Sample;


/// A trait that defines the behavior of a learning algorithm.
/// Given a training sample,
/// a [`Learner`] returns a hypothesis of type [`Learner::Hypothesis`].
pub trait Learner {
    /// Returned hypothesis type.
    type Hypothesis;


    /// Returns the name of the learner.
    fn name(&self) -> &str {
        "Unknown"
    }


    /// Returns the parameters of the learner as `(name, value)` pairs.
    /// Returns `None` by default.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains a hypothesis on `sample`.
    fn produce(&self, sample: &Sample) -> Result<Self::Hypothesis>;
}
