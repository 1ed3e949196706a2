//! Error types for vbump using thiserror.

use thiserror::Error;

/// Broad classification of a [`BumpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input has the wrong shape (too many components).
    InvalidFormat,
    /// The input has the right shape but a component cannot be used.
    MalformedInput,
}

/// Errors from parsing or bumping a version string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BumpError {
    #[error("Too many digits: expected at most 3 components, found {count}")]
    TooManyComponents { count: usize },

    #[error("Version string is empty")]
    EmptyInput,

    #[error("Component {index} is not a non-negative integer: '{value}'")]
    NonNumericComponent { index: usize, value: String },
}

impl BumpError {
    /// Which class of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BumpError::TooManyComponents { .. } => ErrorKind::InvalidFormat,
            BumpError::EmptyInput | BumpError::NonNumericComponent { .. } => {
                ErrorKind::MalformedInput
            }
        }
    }
}
