//! Unified error handling
//!
//! One application error type for all layers:
//! - services return [`AppError`] directly
//! - the axum boundary renders it via `IntoResponse`
//! - the GraphQL boundary renders it via [`ErrorExtensions`], attaching the
//!   error kind as a `code` extension
//!
//! # Error kinds
//!
//! | Kind | Code | HTTP |
//! |------|------|------|
//! | NotFound | NOT_FOUND | 404 |
//! | InvalidCredentials | INVALID_CREDENTIALS | 401 |
//! | Duplicate | DUPLICATE_IDENTITY | 409 |
//! | Validation | VALIDATION_FAILED | 400 |
//! | TokenExpired | TOKEN_EXPIRED | 401 |
//! | InvalidToken | INVALID_TOKEN | 401 |
//! | Database | DATABASE_ERROR | 500 |
//! | Internal | INTERNAL_ERROR | 500 |

use async_graphql::ErrorExtensions;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::auth::JwtError;
use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Lookup target absent (404); carries the full message, e.g. "User not found"
    #[error("{0}")]
    NotFound(String),

    /// Password mismatch for an existing user (401)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Uniqueness violation on signup (409)
    #[error("{0}")]
    Duplicate(String),

    /// Input validation failure (400), reserved: the core performs no
    /// field validation of its own
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Bearer token past its expiry (401)
    #[error("Token expired")]
    TokenExpired,

    /// Bearer token failed signature or shape checks (401)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Store-level failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable error code, exposed as the GraphQL `code` extension
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Duplicate(_) => "DUPLICATE_IDENTITY",
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::TokenExpired => "TOKEN_EXPIRED",
            AppError::InvalidToken(_) => "INVALID_TOKEN",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status for the REST-ish endpoints (health, error fallbacks)
    pub fn http_status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Duplicate(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TokenExpired | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error ("User not found", "Employee xyz not found")
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    /// Create a duplicate identity error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an invalid token error
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::InvalidToken(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Duplicate(msg),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::ExpiredToken => AppError::TokenExpired,
            JwtError::InvalidSignature => AppError::InvalidToken("invalid signature".into()),
            JwtError::InvalidToken(msg) => AppError::InvalidToken(msg),
            JwtError::GenerationFailed(msg) | JwtError::ConfigError(msg) => {
                AppError::Internal(msg)
            }
        }
    }
}

/// Error body for the plain HTTP endpoints
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Internal detail stays in the logs, not in the response body
        let message = match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorBody {
            code: self.code(),
            message,
        });

        (self.http_status(), body).into_response()
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let message = match self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::not_found("User").code(), "NOT_FOUND");
        assert_eq!(AppError::invalid_credentials().code(), "INVALID_CREDENTIALS");
        assert_eq!(AppError::duplicate("taken").code(), "DUPLICATE_IDENTITY");
        assert_eq!(AppError::database("boom").code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            AppError::not_found("User").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::invalid_credentials().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::duplicate("taken").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::internal("boom").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(AppError::not_found("User").to_string(), "User not found");
        assert_eq!(
            AppError::invalid_credentials().to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_repo_error_conversion() {
        let err: AppError = RepoError::NotFound("Employee x".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = RepoError::Duplicate("Username 'ana' already exists".into()).into();
        assert!(matches!(err, AppError::Duplicate(_)));

        let err: AppError = RepoError::Database("io".into()).into();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_jwt_error_conversion() {
        let err: AppError = JwtError::ExpiredToken.into();
        assert!(matches!(err, AppError::TokenExpired));

        let err: AppError = JwtError::InvalidToken("bad header".into()).into();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = AppError::invalid_credentials().extend();
        assert_eq!(err.message, "Invalid credentials");
        let extensions = err.extensions.expect("extensions set");
        let json = serde_json::to_value(&extensions).unwrap();
        assert_eq!(json["code"], "INVALID_CREDENTIALS");
    }

    #[test]
    fn test_internal_detail_not_leaked_to_graphql() {
        let err = AppError::database("connection refused on 127.0.0.1:8000").extend();
        assert_eq!(err.message, "Database error");
    }
}
