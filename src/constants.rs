//! Default parameters.

/// The base of the logarithm used by the entropy criterion by default.
pub const DEFAULT_ENTROPY_BASE: f64 = 2.0;

/// Tolerance used when comparing impurity values in tests and checks.
pub const NUMERIC_TOLERANCE:    f64 = 1e-9;

/// Initial capacity of the line buffer used by the CSV reader.
pub const BUFFER_SIZE:        usize = 256;
