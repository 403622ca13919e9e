//! Branding Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type BrandingResult<T> = Result<T, BrandingError>;

#[derive(Debug, Error)]
pub enum BrandingError {
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Invalid settings document: {0}")]
    InvalidDocument(#[source] serde_json::Error),

    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BrandingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BrandingError::UnknownScreen(_) => StatusCode::NOT_FOUND,
            BrandingError::InvalidDocument(_) | BrandingError::Read { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BrandingError::UnknownScreen(_) => ErrorKind::NotFound,
            BrandingError::InvalidDocument(_) | BrandingError::Read { .. } => {
                ErrorKind::InternalServerError
            }
        }
    }

    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Branding settings error");
        } else {
            tracing::debug!(error = %self, "Branding lookup failed");
        }
    }
}

impl From<BrandingError> for AppError {
    fn from(err: BrandingError) -> Self {
        match err {
            BrandingError::UnknownScreen(_) => AppError::new(err.kind(), err.to_string())
                .with_action("Use one of: welcome, register, collector-register, admin, chat"),
            BrandingError::InvalidDocument(source) => {
                AppError::internal("Branding settings are unavailable").with_source(source)
            }
            BrandingError::Read { source, .. } => {
                AppError::internal("Branding settings are unavailable").with_source(source)
            }
        }
    }
}

impl IntoResponse for BrandingError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
