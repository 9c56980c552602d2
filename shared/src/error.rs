use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Resource not found")]
    NotFound,
    #[error("No access to this resource")]
    NoAccess,
    #[error("A ballot was already cast for this election")]
    DuplicateVote,
    #[error("Validation failed")]
    ValidationFailed,
    #[error("Internal system error")]
    SystemError,
}

/// Error body returned by the backend. Newer services attach a structured
/// `code`; older ones only send a message, where "already voted" in the text
/// is the sole machine-checkable signal of a duplicate-vote rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into(), code: None }
    }

    pub fn with_code(message: impl Into<String>, code: ErrorCode) -> Self {
        Self { error: message.into(), code: Some(code) }
    }

    /// Structured code first, message substring as the legacy fallback.
    pub fn is_duplicate_vote(&self) -> bool {
        self.code == Some(ErrorCode::DuplicateVote)
            || self.error.to_lowercase().contains("already voted")
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}: {}", code, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for ErrorResponse {}
