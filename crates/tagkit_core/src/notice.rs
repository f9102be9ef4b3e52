use std::fmt;

/// Classification of a failed or refused operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    FileNotFound,
    ReadError,
    WriteError,
    EmptyPool,
    NoMatchesFound,
    /// Requested sample larger than the pool; the draw is clamped.
    InsufficientPoolSize,
    InvalidSelector,
    /// An action was triggered before its input existed.
    MissingInput,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::FileNotFound => write!(f, "file not found"),
            FailureKind::ReadError => write!(f, "read error"),
            FailureKind::WriteError => write!(f, "write error"),
            FailureKind::EmptyPool => write!(f, "empty tag pool"),
            FailureKind::NoMatchesFound => write!(f, "no matches found"),
            FailureKind::InsufficientPoolSize => write!(f, "insufficient pool size"),
            FailureKind::InvalidSelector => write!(f, "invalid selector"),
            FailureKind::MissingInput => write!(f, "missing input"),
        }
    }
}

/// A failure carried across the message boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl OperationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// User-facing message raised by `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub kind: Option<FailureKind>,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            kind: None,
            message: message.into(),
        }
    }

    pub fn warning(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            kind: Some(kind),
            message: message.into(),
        }
    }

    pub fn error(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            kind: Some(kind),
            message: message.into(),
        }
    }

    /// Empty pools and empty extractions are warnings; everything else is an error.
    pub fn from_failure(failure: &OperationFailure) -> Self {
        match failure.kind {
            FailureKind::EmptyPool
            | FailureKind::NoMatchesFound
            | FailureKind::InsufficientPoolSize
            | FailureKind::MissingInput => Self::warning(failure.kind, failure.message.clone()),
            _ => Self::error(failure.kind, failure.message.clone()),
        }
    }
}
