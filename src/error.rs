//! Crate-level error type.

use std::error::Error as StdError;
use std::fmt;

/// Errors surfaced at the crate boundary.
///
/// Hot-path functions (objective evaluation, permutation edits, the local
/// search step) rely on caller discipline and `debug_assert!` instead; only
/// constructors and the runner entry points are fallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed problem input, e.g. a non-square weight matrix.
    InvalidInput(String),
    /// A configuration parameter outside its valid range.
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl StdError for Error {}
