// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A draft field failed a numeric precondition. The draft is rejected as a whole.
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The draft meets every precondition, but a derived value does not fit
    /// the decimal range.
    #[error("`{field}` is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    #[error("Unrecognised {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

impl Error {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
