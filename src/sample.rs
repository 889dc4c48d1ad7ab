//! Struct `Sample` represents a batch of labeled records.

// Provides the cell type.
pub(crate) mod value;
// Provides attribute descriptors.
pub(crate) mod attribute;
// Provides the record pair.
pub(crate) mod record;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use value::Value;
pub use attribute::{Attribute, AttributeMask};
pub use record::Record;
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
