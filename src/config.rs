//! Training parameters that can be stored as JSON.
use serde::{Serialize, Deserialize};

use std::fs;
use std::path::Path;

use crate::decision_tree::{Criterion, Depth};
use crate::error::Result;


/// The parameters of a decision tree build.
///
/// ```
/// use minitree::TreeConfig;
///
/// let config = TreeConfig::from_json(
///     r#"{"criterion": "Gini", "max_depth": {"Limited": 3}}"#
/// ).unwrap();
/// assert_eq!(minitree::Depth::Limited(3), config.max_depth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    /// The splitting criterion.
    #[serde(default)]
    pub criterion: Criterion,
    /// The depth bound.
    #[serde(default)]
    pub max_depth: Depth,
}


impl TreeConfig {
    /// Parses a configuration from a JSON string
    /// and checks its parameters.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }


    /// Reads a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }


    /// Serializes this configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Checks the parameters.
    pub fn validate(&self) -> Result<()> {
        self.criterion.validate()
    }
}
