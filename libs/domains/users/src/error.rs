use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::NAME_AND_EMAIL_REQUIRED;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Unique constraint on `email` rejected the write; carries the driver message
    #[error("{0}")]
    Conflict(String),

    /// Any other database failure; carries the driver message
    #[error("{0}")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn missing_fields() -> Self {
        UserError::Validation(NAME_AND_EMAIL_REQUIRED.to_string())
    }
}

/// Storage errors reach the client verbatim as 500s, duplicates included.
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound("User not found".to_string()),
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Conflict(msg) | UserError::Storage(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
