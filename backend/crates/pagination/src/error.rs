//! Pagination Error Types
//!
//! The window math itself cannot fail. These errors come from the HTTP
//! boundary, where query values are parsed and checked against the
//! configured limits before the domain is called.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Pagination-specific result type alias
pub type PaginationResult<T> = Result<T, PaginationError>;

#[derive(Debug, Error)]
pub enum PaginationError {
    /// Query string could not be parsed
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),

    /// A numeric parameter is outside its accepted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

impl PaginationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaginationError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            PaginationError::OutOfRange { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PaginationError::InvalidQuery(_) => ErrorKind::BadRequest,
            PaginationError::OutOfRange { .. } => ErrorKind::UnprocessableEntity,
        }
    }

    fn log(&self) {
        tracing::debug!(error = %self, "Rejected pagination query");
    }
}

impl From<PaginationError> for AppError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::InvalidQuery(rejection) => AppError::from(rejection)
                .with_action("Send currentPage and totalItems as integers"),
            PaginationError::OutOfRange { .. } => AppError::new(err.kind(), err.to_string())
                .with_action("Adjust the value into the accepted range"),
        }
    }
}

impl IntoResponse for PaginationError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
