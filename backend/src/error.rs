use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorCode, ErrorResponse, ValidationError};
use thiserror::Error;
use crate::store::StoreError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Poll not found.")]
    NotFound,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("optionId is required.")]
    MissingOptionId,
    #[error("{0}")]
    InvalidPoll(#[from] ValidationError),
    #[error("Invalid option")]
    InvalidOption,
    #[error("This poll is closed")]
    PollClosed,
    #[error("You have already voted on this poll")]
    AlreadyVoted,
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound => Status::NotFound,
            ApiError::InvalidBody
            | ApiError::MissingOptionId
            | ApiError::InvalidPoll(_)
            | ApiError::InvalidOption => Status::BadRequest,
            ApiError::PollClosed | ApiError::AlreadyVoted => Status::Conflict,
            ApiError::MethodNotAllowed => Status::MethodNotAllowed,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::NotFound => ErrorCode::NotFound,
            ApiError::InvalidBody | ApiError::MissingOptionId | ApiError::InvalidPoll(_) => ErrorCode::InvalidInput,
            ApiError::InvalidOption => ErrorCode::InvalidOption,
            ApiError::PollClosed => ErrorCode::PollClosed,
            ApiError::AlreadyVoted => ErrorCode::AlreadyVoted,
            ApiError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PollNotFound => ApiError::NotFound,
            StoreError::PollClosed => ApiError::PollClosed,
            StoreError::InvalidOption => ApiError::InvalidOption,
            StoreError::AlreadyVoted => ApiError::AlreadyVoted,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        rocket::Response::build_from(Json(self.body()).respond_to(req)?)
            .status(self.status())
            .ok()
    }
}
