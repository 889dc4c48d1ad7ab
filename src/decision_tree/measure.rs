//! Defines some functions that measure the node impurity.
use std::collections::BTreeMap;

use crate::sample::Value;


/// Returns the relative frequency of each distinct label.
/// The map is ordered by label, so that summing over it
/// always visits the labels in the same order.
pub fn discrete_distribution<'a, I>(labels: I) -> BTreeMap<&'a Value, f64>
    where I: IntoIterator<Item = &'a Value>
{
    let mut counter: BTreeMap<&'a Value, usize> = BTreeMap::new();
    for label in labels {
        *counter.entry(label).or_insert(0) += 1;
    }

    let total = counter.values().sum::<usize>() as f64;
    counter.into_iter()
        .map(|(label, count)| (label, count as f64 / total))
        .collect()
}


/// Returns the entropy (in base `base`) of a distribution.
/// Labels with zero probability do not contribute.
#[inline]
pub fn distribution_entropy(dist: &BTreeMap<&Value, f64>, base: f64) -> f64 {
    let ln_base = base.ln();
    dist.values()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.ln() / ln_base)
        .sum::<f64>()
}


/// Returns the Gini index of a distribution.
/// An empty distribution has index `0`.
#[inline]
pub fn distribution_gini(dist: &BTreeMap<&Value, f64>) -> f64 {
    if dist.is_empty() { return 0.0; }

    let correct = dist.values()
        .map(|p| p.powi(2))
        .sum::<f64>();

    1.0 - correct
}


/// Returns the entropy of the empirical distribution of `labels`.
pub fn entropy<'a, I>(labels: I, base: f64) -> f64
    where I: IntoIterator<Item = &'a Value>
{
    distribution_entropy(&discrete_distribution(labels), base)
}


/// Returns the Gini index of the empirical distribution of `labels`.
pub fn gini<'a, I>(labels: I) -> f64
    where I: IntoIterator<Item = &'a Value>
{
    distribution_gini(&discrete_distribution(labels))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUMERIC_TOLERANCE;

    fn labels(xs: &[&str]) -> Vec<Value> {
        xs.iter().map(|&x| Value::from(x)).collect()
    }

    #[test]
    fn test_distribution() {
        let ys = labels(&["A", "B", "A", "A"]);
        let dist = discrete_distribution(&ys);
        assert_eq!(2, dist.len());
        assert_eq!(0.75, dist[&Value::from("A")]);
        assert_eq!(0.25, dist[&Value::from("B")]);
    }

    #[test]
    fn test_balanced_binary() {
        let ys = labels(&["A", "B"]);
        let h = entropy(&ys, 2.0);
        let g = gini(&ys);
        assert!((h - 1.0).abs() < NUMERIC_TOLERANCE, "entropy: {h}");
        assert!((g - 0.5).abs() < NUMERIC_TOLERANCE, "gini: {g}");
    }

    #[test]
    fn test_pure_labels() {
        let ys = labels(&["A", "A", "A"]);
        assert_eq!(0.0, entropy(&ys, 2.0));
        assert_eq!(0.0, gini(&ys));
    }

    #[test]
    fn test_entropy_base() {
        let ys = labels(&["A", "B"]);
        let h = entropy(&ys, std::f64::consts::E);
        let exp = 2f64.ln();
        assert!((h - exp).abs() < NUMERIC_TOLERANCE, "expected {exp}, got {h}");
    }

    #[test]
    fn test_empty_labels() {
        let ys: Vec<Value> = Vec::new();
        assert_eq!(0.0, entropy(&ys, 2.0));
        assert_eq!(0.0, gini(&ys));
    }
}
