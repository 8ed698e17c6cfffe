use std::path::PathBuf;

use crate::codec::{INVALID_LEADING_MESSAGE, INVALID_NUMBER_MESSAGE};

/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("index {index} is out of range for a strip of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("line {line}: {}", INVALID_NUMBER_MESSAGE)]
    InvalidNumberFormat { line: usize },

    #[error("line {line}: {}", INVALID_LEADING_MESSAGE)]
    InvalidLeadingCharacter { line: usize },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LedgerError {
    /// The message shown to a user for a rejected strip file, without the
    /// line prefix. `None` for errors that are not validation failures.
    pub fn validation_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidNumberFormat { .. } => Some(INVALID_NUMBER_MESSAGE),
            Self::InvalidLeadingCharacter { .. } => Some(INVALID_LEADING_MESSAGE),
            _ => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
