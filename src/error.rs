use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{dto::validation::first_message, state::game::GameError};

const GAME_ALREADY_STARTED: &str = "Game is already started.";
const GAME_NOT_STARTED: &str = "Game has not started yet.";

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The operation needs a running game.
    #[error("{0}")]
    PreconditionNotMet(String),
    /// Invalid input provided by the client.
    #[error("{0}")]
    InvalidInput(String),
    /// The request would not change anything.
    #[error("{0}")]
    NoOp(String),
}

impl From<GameError> for ServiceError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::AlreadyStarted => ServiceError::NoOp(GAME_ALREADY_STARTED.into()),
            GameError::NotStarted => ServiceError::PreconditionNotMet(GAME_NOT_STARTED.into()),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        let message = first_message(&err).unwrap_or_else(|| format!("validation failed: {err}"));
        ServiceError::InvalidInput(message)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request: invalid input or a precondition that does not hold.
    #[error("{0}")]
    BadRequest(String),
    /// The request was accepted but left the state untouched.
    #[error("{0}")]
    NotModified(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::PreconditionNotMet(message) => AppError::BadRequest(message),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NoOp(message) => AppError::NotModified(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotModified(_) => StatusCode::NOT_MODIFIED,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}
