//! Error re-exports
//!
//! Handlers return [`AppResult`]; repository errors convert through
//! `From<RepoError> for AppError`.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { code, message }
            | RepoError::Duplicate { code, message }
            | RepoError::Conflict { code, message } => AppError::with_message(code, message),
            RepoError::Validation(message) => AppError::validation(message),
            RepoError::Database(message) => AppError::database(message),
        }
    }
}
