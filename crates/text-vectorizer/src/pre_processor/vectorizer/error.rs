use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = VectorizerError> = std::result::Result<T, E>;

/// Broad class of a [`VectorizerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected while building [`VectorizerParams`](super::VectorizerParams).
    Configuration,
    /// Operation called in the wrong lifecycle state.
    State,
    /// Numeric pipeline could not produce a value.
    Computation,
}

/// Errors raised by the vectorization pipeline.
#[derive(Debug, Error)]
pub enum VectorizerError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Unable to read stop words from {}", path.display())]
    StopWordsUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{operation}` called before `fit`")]
    NotFitted { operation: &'static str },

    /// Term frequency divides by the in-vocabulary token total of a row.
    #[error("Document {row} has no in-vocabulary tokens, term frequency is undefined")]
    EmptyDocument { row: usize },

    #[error("Shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl VectorizerError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration { .. } | Self::StopWordsUnreadable { .. } => {
                ErrorKind::Configuration
            }
            Self::NotFitted { .. } => ErrorKind::State,
            Self::EmptyDocument { .. } | Self::ShapeMismatch { .. } => ErrorKind::Computation,
        }
    }
}
