//! Gate Error Types
//!
//! This module provides gate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Validator errors never become HTTP responses: the guard folds them into an
//! invalid verdict. Only cookie encoding and configuration failures are ever
//! rendered, through the kernel fallback page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::config::ConfigError;
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Gate-specific error variants
#[derive(Debug, Error)]
pub enum GateError {
    /// Session record or page payload could not be serialized
    #[error("JSON encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Signed cookie exceeds the browser limit
    #[error("Session cookie too large: {len} bytes (limit {limit})")]
    CookieTooLarge { len: usize, limit: usize },

    /// Set-Cookie header could not be built
    #[error("Invalid Set-Cookie header: {0}")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),

    /// Validator could not be reached
    #[error("Session validator unreachable: {0}")]
    ValidatorTransport(String),

    /// Validator answered with a non-success status
    #[error("Session validator returned status {0}")]
    ValidatorStatus(u16),

    /// Validator answered with an unexpected body
    #[error("Session validator returned a malformed response: {0}")]
    ValidatorResponse(String),

    /// Validator did not answer within the configured bound
    #[error("Session validator timed out after {0} ms")]
    ValidatorTimeout(u128),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GateError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::ValidatorTransport(_) => ErrorKind::ServiceUnavailable,
            GateError::ValidatorStatus(_) | GateError::ValidatorResponse(_) => {
                ErrorKind::BadGateway
            }
            GateError::ValidatorTimeout(_) => ErrorKind::GatewayTimeout,
            GateError::Encoding(_)
            | GateError::CookieTooLarge { .. }
            | GateError::InvalidHeader(_)
            | GateError::Config(_)
            | GateError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether this error came from the remote validator
    pub fn is_validator_failure(&self) -> bool {
        matches!(
            self,
            GateError::ValidatorTransport(_)
                | GateError::ValidatorStatus(_)
                | GateError::ValidatorResponse(_)
                | GateError::ValidatorTimeout(_)
        )
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GateError::Encoding(e) => {
                tracing::error!(error = %e, "JSON encoding failed");
            }
            GateError::InvalidHeader(e) => {
                tracing::error!(error = %e, "Set-Cookie header rejected");
            }
            GateError::CookieTooLarge { len, limit } => {
                tracing::error!(len, limit, "Session cookie over size limit");
            }
            GateError::Internal(msg) => {
                tracing::error!(message = %msg, "Gate internal error");
            }
            _ if self.is_validator_failure() => {
                tracing::warn!(error = %self, "Session validator failure");
            }
            _ => {
                tracing::debug!(error = %self, "Gate error");
            }
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
