use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::{BTreeSet, HashSet};

use crate::constants::BUFFER_SIZE;
use crate::error::{Result, TreeError};
use super::attribute::Attribute;
use super::record::Record;
use super::sample_struct::Sample;
use super::value::Value;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
///
/// A column is read as a numeric attribute
/// if every cell parses as `f64` and the column is not listed
/// in [`SampleReader::nominal_features`].
/// Otherwise, the column becomes a discrete attribute
/// whose domain is the set of observed cells.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minitree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleReader {
    file:        Option<PathBuf>,
    has_header:  bool,
    target:      Option<String>,
    nominal:     HashSet<String>,
    all_nominal: bool,
}


impl SampleReader {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the file name.
    pub fn file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    /// Without a header, the columns are named
    /// `Feat. [1]`, `Feat. [2]`, ...
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for target label.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = Some(column.as_ref().to_string());
        self
    }


    /// Force the given columns to be read as discrete attributes.
    pub fn nominal_features<I, S>(mut self, columns: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        self.nominal.extend(
            columns.into_iter().map(|s| s.as_ref().to_string())
        );
        self
    }


    /// Read every column as a discrete attribute.
    /// Default is `false`.
    pub fn all_nominal(mut self, flag: bool) -> Self {
        self.all_nominal = flag;
        self
    }


    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.as_ref()
            .ok_or_else(|| TreeError::InvalidParameter(
                "file".to_string(),
                "a path".to_string(),
                "nothing".to_string(),
            ))?;
        let file = File::open(file)?;
        self.read_from(BufReader::new(file))
    }


    /// Reads CSV lines from `reader`.
    /// The file set by [`SampleReader::file`] is ignored.
    pub fn read_from<R: BufRead>(self, mut reader: R) -> Result<Sample> {
        let mut header: Option<Vec<String>> = None;
        let mut rows: Vec<Vec<String>> = Vec::new();

        let mut line = String::with_capacity(BUFFER_SIZE);
        while reader.read_line(&mut line)? > 0 {
            let cells = line.trim()
                .split(',')
                .map(|x| x.trim().to_string())
                .collect::<Vec<_>>();
            let is_blank = line.trim().is_empty();
            line.clear();
            if is_blank { continue; }

            if self.has_header && header.is_none() {
                header = Some(cells);
                continue;
            }
            if let Some(first) = rows.first() {
                if first.len() != cells.len() {
                    return Err(TreeError::ArityMismatch(first.len(), cells.len()));
                }
            }
            rows.push(cells);
        }

        let n_column = header.as_ref()
            .map(|h| h.len())
            .or_else(|| rows.first().map(|r| r.len()))
            .unwrap_or(0);
        let header = header.unwrap_or_else(|| {
            (1..=n_column).map(|i| format!("Feat. [{i}]")).collect()
        });
        if let Some(first) = rows.first() {
            if first.len() != n_column {
                return Err(TreeError::ArityMismatch(n_column, first.len()));
            }
        }

        let target = self.target.as_ref()
            .ok_or_else(|| TreeError::InvalidParameter(
                "target_feature".to_string(),
                "a column name".to_string(),
                "nothing".to_string(),
            ))?;
        let target_pos = header.iter()
            .position(|name| name == target)
            .ok_or_else(|| TreeError::UnknownFeature(target.clone()))?;

        let numeric = (0..n_column)
            .map(|j| {
                !self.all_nominal
                    && !self.nominal.contains(&header[j])
                    && rows.iter().all(|row| row[j].parse::<f64>().is_ok())
            })
            .collect::<Vec<_>>();

        let cell = |j: usize, s: &str| -> Value {
            match s.parse::<f64>() {
                Ok(x) if numeric[j] => Value::from(x),
                _ => Value::from(s),
            }
        };

        let mut names = Vec::with_capacity(n_column);
        let mut attributes = Vec::with_capacity(n_column);
        for j in (0..n_column).filter(|&j| j != target_pos) {
            names.push(header[j].clone());
            let attribute = if numeric[j] {
                Attribute::Numeric
            } else {
                let values = rows.iter()
                    .map(|row| cell(j, &row[j]))
                    .collect::<BTreeSet<_>>();
                Attribute::Discrete { values }
            };
            attributes.push(attribute);
        }

        let records = rows.iter()
            .map(|row| {
                let conditions = (0..n_column)
                    .filter(|&j| j != target_pos)
                    .map(|j| cell(j, &row[j]))
                    .collect::<Vec<_>>();
                Record::new(conditions, cell(target_pos, &row[target_pos]))
            })
            .collect::<Vec<_>>();

        Sample::from_records(names, attributes, records)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV: &str = "attr,attr2,attr3\n1,2,Y\n2,4,Y\n3,4,N\n5,2,N\n6,4,N\n";

    #[test]
    fn test_read_numeric_and_nominal() {
        let sample = SampleReader::new()
            .has_header(true)
            .target_feature("attr3")
            .read_from(Cursor::new(CSV))
            .unwrap();

        assert_eq!((5, 2), sample.shape());
        assert!(sample.attributes()[0].is_numeric());
        assert_eq!(&Value::from("Y"), sample[1].label());
        assert_eq!(&Value::from(2.0), &sample[1].conditions()[0]);
    }

    #[test]
    fn test_nominal_reader_collects_domain() {
        let sample = SampleReader::new()
            .has_header(true)
            .target_feature("attr")
            .all_nominal(true)
            .read_from(Cursor::new(CSV))
            .unwrap();

        let exp = [Value::from("2"), Value::from("4")]
            .into_iter()
            .collect::<BTreeSet<_>>();
        let res = sample.attributes()[0].values().unwrap();
        assert_eq!(&exp, res, "expected {exp:?}, got {res:?}.");
        assert_eq!(&Value::from("Y"), &sample[0].conditions()[1]);
    }

    #[test]
    fn test_without_header() {
        let sample = SampleReader::new()
            .target_feature("Feat. [3]")
            .read_from(Cursor::new("1,a,x\n2,b,y\n"))
            .unwrap();
        assert_eq!(vec!["Feat. [1]", "Feat. [2]"], sample.names());
        assert!(sample.attributes()[1].is_discrete());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let res = SampleReader::new()
            .target_feature("Feat. [1]")
            .read_from(Cursor::new("1,2\n3\n"));
        assert!(matches!(res, Err(TreeError::ArityMismatch(2, 1))));
    }

    #[test]
    fn test_unknown_target() {
        let res = SampleReader::new()
            .has_header(true)
            .target_feature("class")
            .read_from(Cursor::new(CSV));
        assert!(matches!(res, Err(TreeError::UnknownFeature(_))));
    }
}
