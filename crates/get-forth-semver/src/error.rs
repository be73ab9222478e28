use std::num::ParseIntError;

use thiserror::Error;

use crate::version::Field;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SemverError {
    #[error("empty version")]
    Empty,

    #[error("invalid semver: {version:?}")]
    InvalidFormat { version: String },

    #[error("invalid {field}: {source}")]
    InvalidField {
        field: Field,
        #[source]
        source: ParseIntError,
    },

    #[error("resulting {field} would be negative")]
    NegativeResult { field: Field },

    #[error("resulting {field} is too large")]
    Overflow { field: Field },
}

pub type Result<T> = std::result::Result<T, SemverError>;
