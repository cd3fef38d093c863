//! Admin Auth Error Types
//!
//! Two families live here:
//! - [`AdminAuthError`]: infrastructure failures (database, internal). These
//!   are logged and collapsed to "reject" by the decision points; they are
//!   never surfaced to a boolean caller.
//! - [`TokenRejection`]: the reason a session token failed verification.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Admin-auth result type alias
pub type AuthResult<T> = Result<T, AdminAuthError>;

/// Infrastructure error variants
#[derive(Debug, Error)]
pub enum AdminAuthError {
    /// Database error (admin user lookup)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminAuthError {
    /// Stable code used in logs
    pub fn code(&self) -> &'static str {
        match self {
            AdminAuthError::Database(_) => "DB_ERROR",
            AdminAuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminAuthError::Database(sqlx::Error::PoolTimedOut) => StatusCode::SERVICE_UNAVAILABLE,
            AdminAuthError::Database(_) | AdminAuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AdminAuthError::Database(e) => {
                tracing::error!(code = self.code(), error = %e, "Admin auth database error");
            }
            AdminAuthError::Internal(msg) => {
                tracing::error!(code = self.code(), message = %msg, "Admin auth internal error");
            }
        }
    }
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        self.log();
        let body = serde_json::json!({
            "error": self.code(),
            "message": self
                .status_code()
                .canonical_reason()
                .unwrap_or("Internal Server Error"),
        });
        (self.status_code(), axum::Json(body)).into_response()
    }
}

/// Why a session token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenRejection {
    /// Not exactly three non-empty, colon-separated parts
    #[error("Malformed session token")]
    InvalidFormat,

    /// Expiry unparsable or in the past
    #[error("Session token expired")]
    ExpiredToken,

    /// HMAC does not match `id:expiresAt`
    #[error("Session token signature mismatch")]
    InvalidSignature,

    /// Well-formed and signed, but revoked or unknown to this process
    #[error("Session is not active")]
    SessionNotActive,

    /// Verification could not be carried out
    #[error("Session token could not be validated")]
    ValidationError,
}

impl TokenRejection {
    /// Wire/log code
    pub const fn code(&self) -> &'static str {
        match self {
            TokenRejection::InvalidFormat => "INVALID_FORMAT",
            TokenRejection::ExpiredToken => "EXPIRED_TOKEN",
            TokenRejection::InvalidSignature => "INVALID_SIGNATURE",
            TokenRejection::SessionNotActive => "SESSION_NOT_ACTIVE",
            TokenRejection::ValidationError => "VALIDATION_ERROR",
        }
    }
}
