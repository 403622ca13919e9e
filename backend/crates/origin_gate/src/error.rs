//! Origin Gate Error Types
//!
//! Gate decisions are total. Errors only arise while turning deployment
//! configuration into a [`crate::domain::GatePolicy`], which happens once at
//! startup.

use axum::http::StatusCode;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

#[derive(Debug, Error)]
pub enum GateError {
    /// Allow-list entry is not a valid header value
    #[error("Invalid allowed origin: {0:?}")]
    InvalidOrigin(String),

    /// Allowed method is not a valid HTTP method token
    #[error("Invalid allowed method: {0:?}")]
    InvalidMethod(String),

    /// Allowed header is not a valid header name
    #[error("Invalid allowed header: {0:?}")]
    InvalidHeader(String),

    /// Unknown deployment preset name
    #[error("Unknown CORS preset: {0:?} (expected \"api\" or \"site\")")]
    UnknownPreset(String),
}

impl GateError {
    /// Configuration errors are server faults
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InternalServerError
    }

    fn log(&self) {
        tracing::error!(error = %self, "Origin gate misconfigured");
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        err.log();
        let kind = err.kind();
        AppError::new(kind, err.to_string())
            .with_action("Fix ALLOWED_ORIGINS / ALLOWED_HEADERS / CORS_PRESET")
    }
}
