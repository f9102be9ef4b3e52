use std::io;
use std::path::{Path, PathBuf};

use tagkit_core::{FailureKind, OperationFailure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no usable tags in {}", path.display())]
    EmptyPool { path: PathBuf },
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

impl TagError {
    /// Classify a read failure, separating a missing path from everything else.
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            TagError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TagError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            TagError::FileNotFound { .. } => FailureKind::FileNotFound,
            TagError::Read { .. } | TagError::Decode { .. } => FailureKind::ReadError,
            TagError::Write { .. } => FailureKind::WriteError,
            TagError::EmptyPool { .. } => FailureKind::EmptyPool,
            TagError::InvalidSelector { .. } => FailureKind::InvalidSelector,
        }
    }
}

impl From<TagError> for OperationFailure {
    fn from(err: TagError) -> Self {
        OperationFailure::new(err.kind(), err.to_string())
    }
}
