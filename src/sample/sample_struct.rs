use polars::prelude::*;
use rand::Rng;
use rand::seq::index;
use rayon::prelude::*;

use std::ops::{Index, Range};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{Result, TreeError};
use super::attribute::Attribute;
use super::record::Record;
use super::value::Value;


/// Struct `Sample` holds the attribute descriptors
/// and the labeled records of a training set.
/// Every record pushed into a `Sample` is checked against the descriptors.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) names:         Vec<String>,
    pub(super) attributes:    Vec<Attribute>,
    pub(super) records:       Vec<Record>,
}


impl Sample {
    /// Construct an empty sample with named attributes.
    pub fn new(names: Vec<String>, attributes: Vec<Attribute>)
        -> Result<Self>
    {
        if names.len() != attributes.len() {
            return Err(TreeError::ArityMismatch(
                attributes.len(), names.len()
            ));
        }
        let name_to_index = names.iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();

        let records = Vec::new();
        Ok(Self { name_to_index, names, attributes, records, })
    }


    /// Construct an empty sample whose attributes are named
    /// `Feat. [1]`, `Feat. [2]`, ...
    pub fn unnamed(attributes: Vec<Attribute>) -> Self {
        let names = (1..=attributes.len())
            .map(|i| format!("Feat. [{i}]"))
            .collect::<Vec<_>>();
        let name_to_index = names.iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();

        let records = Vec::new();
        Self { name_to_index, names, attributes, records, }
    }


    /// Construct a sample and fill it with `records`.
    /// The iterator is consumed once.
    pub fn from_records<I>(
        names:      Vec<String>,
        attributes: Vec<Attribute>,
        records:    I,
    ) -> Result<Self>
        where I: IntoIterator<Item = Record>
    {
        let mut sample = Self::new(names, attributes)?;
        for record in records {
            sample.push(record)?;
        }
        Ok(sample)
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Numeric columns become numeric attributes;
    /// other columns are read as strings and become discrete attributes
    /// whose domain is the set of observed values.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let columns = data.get_columns()
            .par_iter()
            .map(column_to_values)
            .collect::<Result<Vec<_>>>()?;
        let (_, _, labels) = column_to_values(&target)?;

        let n_sample = data.height();
        if labels.len() != n_sample {
            return Err(TreeError::ArityMismatch(n_sample, labels.len()));
        }

        let mut names = Vec::with_capacity(columns.len());
        let mut attributes = Vec::with_capacity(columns.len());
        let mut cells = Vec::with_capacity(columns.len());
        for (name, attribute, values) in columns {
            names.push(name);
            attributes.push(attribute);
            cells.push(values.into_iter());
        }

        let records = labels.into_iter()
            .map(|label| {
                let conditions = cells.iter_mut()
                    .filter_map(|col| col.next())
                    .collect::<Vec<_>>();
                Record::new(conditions, label)
            })
            .collect::<Vec<_>>();

        Self::from_records(names, attributes, records)
    }


    /// Append a record after checking it against the attributes.
    pub fn push(&mut self, record: Record) -> Result<()> {
        let n_feature = self.attributes.len();
        let conditions = record.conditions();
        if conditions.len() != n_feature {
            return Err(TreeError::ArityMismatch(n_feature, conditions.len()));
        }

        for (i, (attribute, value)) in self.attributes.iter()
            .zip(conditions)
            .enumerate()
        {
            match attribute {
                Attribute::Numeric if !value.is_number() => {
                    return Err(TreeError::NotNumeric(i, value.clone()));
                },
                Attribute::Discrete { values } if !values.contains(value) => {
                    return Err(TreeError::OutOfDomain(i, value.clone()));
                },
                _ => {},
            }
        }

        self.records.push(record);
        Ok(())
    }


    /// Returns the pair of the number of examples and
    /// the number of attributes.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.attributes.len())
    }


    /// Returns the number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }


    /// Returns `true` if the sample holds no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns a slice of the records.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Returns a slice of the attribute descriptors.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// Returns the attribute names.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the position of the attribute named `name`.
    pub fn feature_index<S: AsRef<str>>(&self, name: S) -> Result<usize> {
        let name = name.as_ref();
        self.name_to_index.get(name)
            .copied()
            .ok_or_else(|| TreeError::UnknownFeature(name.to_string()))
    }


    /// Returns the labels in record order.
    pub fn target(&self) -> Vec<&Value> {
        self.records.iter()
            .map(Record::label)
            .collect()
    }


    /// Returns the `i`-th condition value of every record.
    pub fn attribute_values(&self, i: usize) -> Result<Vec<&Value>> {
        self.check_feature(i)?;
        let values = self.records.iter()
            .map(|record| &record.conditions()[i])
            .collect();
        Ok(values)
    }


    /// Partitions the records by the `i`-th condition value.
    /// Each part shares the attributes of `self`.
    pub fn split_by_column_values(&self, i: usize)
        -> Result<BTreeMap<Value, Sample>>
    {
        self.check_feature(i)?;
        let mut parts: BTreeMap<Value, Sample> = BTreeMap::new();
        for record in self.records.iter() {
            let key = record.conditions()[i].clone();
            parts.entry(key)
                .or_insert_with(|| self.empty_like())
                .records
                .push(record.clone());
        }
        Ok(parts)
    }


    /// Returns the records in `range` as a new sample.
    /// The range is clamped to the number of examples.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let mut sample = self.empty_like();
        sample.records = self.records[start..end].to_vec();
        sample
    }


    /// Draws `n` examples uniformly at random with replacement.
    pub fn sample_with_replacement<R: Rng>(&self, n: usize, rng: &mut R)
        -> Result<Self>
    {
        if self.is_empty() && n > 0 {
            return Err(TreeError::EmptyInput);
        }
        let mut sample = self.empty_like();
        sample.records = (0..n)
            .map(|_| self.records[rng.gen_range(0..self.len())].clone())
            .collect();
        Ok(sample)
    }


    /// Draws `n` distinct examples uniformly at random.
    pub fn sample_without_replacement<R: Rng>(&self, n: usize, rng: &mut R)
        -> Result<Self>
    {
        if n > self.len() {
            return Err(TreeError::InvalidParameter(
                "n".to_string(),
                format!("at most {}", self.len()),
                n.to_string(),
            ));
        }
        let mut sample = self.empty_like();
        sample.records = index::sample(rng, self.len(), n)
            .into_iter()
            .map(|i| self.records[i].clone())
            .collect();
        Ok(sample)
    }


    fn empty_like(&self) -> Self {
        Self {
            name_to_index: self.name_to_index.clone(),
            names:         self.names.clone(),
            attributes:    self.attributes.clone(),
            records:       Vec::new(),
        }
    }


    fn check_feature(&self, i: usize) -> Result<()> {
        if i < self.attributes.len() {
            Ok(())
        } else {
            Err(TreeError::FeatureOutOfRange(i, self.attributes.len()))
        }
    }
}


impl Index<usize> for Sample {
    type Output = Record;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.records[idx]
    }
}


/// Convert a `polars::Series` into its name,
/// the inferred attribute, and the cells.
fn column_to_values(series: &Series)
    -> Result<(String, Attribute, Vec<Value>)>
{
    let name = series.name().to_string();
    let missing = |row: usize| TreeError::MissingValue(name.clone(), row);

    if series.dtype().is_numeric() {
        let cast = series.cast(&DataType::Float64)?;
        let values = cast.f64()?
            .into_iter()
            .enumerate()
            .map(|(row, x)| x.map(Value::from).ok_or_else(|| missing(row)))
            .collect::<Result<Vec<_>>>()?;
        Ok((name, Attribute::Numeric, values))
    } else {
        let cast = series.cast(&DataType::Utf8)?;
        let values = cast.utf8()?
            .into_iter()
            .enumerate()
            .map(|(row, s)| s.map(Value::from).ok_or_else(|| missing(row)))
            .collect::<Result<Vec<_>>>()?;
        let domain = values.iter()
            .cloned()
            .collect::<BTreeSet<_>>();
        Ok((name, Attribute::Discrete { values: domain }, values))
    }
}
