use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Invalid option")]
    InvalidOption,
    #[error("Resource not found")]
    NotFound,
    #[error("Poll is closed")]
    PollClosed,
    #[error("Already voted")]
    AlreadyVoted,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal system error")]
    SystemError,
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: ErrorCode,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code,
        }
    }
}
