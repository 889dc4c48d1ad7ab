use minitree::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use std::collections::BTreeSet;


fn weather() -> Sample {
    let names = vec!["outlook".to_string(), "temp".to_string()];
    let attributes = vec![
        Attribute::discrete(["sunny", "rain", "overcast"]),
        Attribute::numeric(),
    ];
    let records = [
        ("sunny",    30.0, "N"),
        ("rain",     18.0, "Y"),
        ("sunny",    21.0, "Y"),
        ("overcast", 25.0, "Y"),
        ("rain",     12.0, "N"),
    ]
        .into_iter()
        .map(|(o, t, y)| Record::new(vec![Value::from(o), Value::from(t)], y));

    Sample::from_records(names, attributes, records).unwrap()
}


#[test]
fn shape_and_lookup() {
    let sample = weather();
    assert_eq!((5, 2), sample.shape());
    assert_eq!(1, sample.feature_index("temp").unwrap());
    assert!(matches!(
        sample.feature_index("wind"),
        Err(TreeError::UnknownFeature(_))
    ));
    assert_eq!(&Value::from("Y"), sample[1].label());
}


#[test]
fn push_validates_records() {
    let mut sample = weather();

    let res = sample.push(Record::new(vec![Value::from("sunny")], "Y"));
    assert!(matches!(res, Err(TreeError::ArityMismatch(2, 1))));

    let res = sample.push(Record::new(
        vec![Value::from("sunny"), Value::from("hot")], "Y"
    ));
    assert!(matches!(res, Err(TreeError::NotNumeric(1, _))));

    let res = sample.push(Record::new(
        vec![Value::from("snow"), Value::from(1.0)], "Y"
    ));
    assert!(matches!(res, Err(TreeError::OutOfDomain(0, _))));

    sample.push(Record::new(vec![Value::from("rain"), Value::from(1.0)], "N"))
        .unwrap();
    assert_eq!(6, sample.len());
}


#[test]
fn attribute_values_in_record_order() {
    let sample = weather();
    let temps = sample.attribute_values(1)
        .unwrap()
        .into_iter()
        .map(|v| v.as_number().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(vec![30.0, 18.0, 21.0, 25.0, 12.0], temps);
    assert!(sample.attribute_values(2).is_err());
}


#[test]
fn split_by_column_values() {
    let sample = weather();
    let parts = sample.split_by_column_values(0).unwrap();

    let keys = parts.keys().cloned().collect::<Vec<_>>();
    let exp = ["overcast", "rain", "sunny"].map(Value::from).to_vec();
    assert_eq!(exp, keys);

    let sizes = parts.values().map(Sample::len).collect::<Vec<_>>();
    assert_eq!(vec![1, 2, 2], sizes);
    assert!(parts.values().all(|part| part.names() == sample.names()));
}


#[test]
fn slice_is_clamped() {
    let sample = weather();
    assert_eq!(2, sample.slice(1..3).len());
    assert_eq!(1, sample.slice(4..10).len());
    assert!(sample.slice(7..9).is_empty());
}


#[test]
fn sampling_with_seed() {
    let sample = weather();
    let mut rng = StdRng::seed_from_u64(1234);

    let boot = sample.sample_with_replacement(20, &mut rng).unwrap();
    assert_eq!(20, boot.len());

    let sub = sample.sample_without_replacement(5, &mut rng).unwrap();
    let temps = sub.attribute_values(1)
        .unwrap()
        .into_iter()
        .map(|v| v.as_number().unwrap().to_bits())
        .collect::<BTreeSet<_>>();
    assert_eq!(5, temps.len());

    let res = sample.sample_without_replacement(6, &mut rng);
    assert!(matches!(res, Err(TreeError::InvalidParameter(..))));
}


#[test]
fn learner_trains_on_sample() {
    let sample = weather();
    let tree = DecisionTreeBuilder::new().build().unwrap();
    assert_eq!("Decision Tree", tree.name());
    assert!(tree.info().is_some());

    let f = tree.produce(&sample).unwrap();
    let predictions = f.predict_all(&sample).unwrap();
    assert_eq!(sample.len(), predictions.len());
    for (record, p) in sample.records().iter().zip(&predictions) {
        assert_eq!(record.label(), p);
    }

    let rendered = f.to_string();
    assert!(rendered.contains("temp") || rendered.contains("outlook"));
}
