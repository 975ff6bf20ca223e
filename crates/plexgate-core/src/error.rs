//! Error types module
//!
//! All errors are unified under the `AppError` enum, which carries enough
//! metadata (status code, error code, log level) for the HTTP layer to render
//! and log it consistently. Catalog and signing failures are deliberately
//! *not* fatal anywhere in the request path: the gateway inspects those
//! results and falls back to relaying, so only the relay path ever surfaces
//! an `AppError` to a client.

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like lookups that found nothing
    Debug,
    /// Warning level - for degraded-but-handled conditions
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl AppError {
    /// HTTP status code to return when this error reaches a client.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::Database(_) => 500,
            AppError::Storage(_) => 500,
            AppError::Upstream(_) => 502,
            AppError::NotFound(_) => 404,
            AppError::Config(_) => 500,
            AppError::Internal(_) => 500,
            AppError::InternalWithSource { .. } => 500,
        }
    }

    /// Machine-readable error code (e.g., "UPSTREAM_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::InternalWithSource { .. } => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message (may differ from the internal error message)
    pub fn client_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Upstream(_) => "Origin server unavailable".to_string(),
            AppError::Database(_) | AppError::Storage(_) => "Internal server error".to_string(),
            AppError::Config(_) => "Internal server error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::NotFound(_) => LogLevel::Debug,
            AppError::Database(_) | AppError::Storage(_) => LogLevel::Warn,
            AppError::Upstream(_) => LogLevel::Error,
            AppError::Config(_) => LogLevel::Error,
            AppError::Internal(_) => LogLevel::Error,
            AppError::InternalWithSource { .. } => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_is_bad_gateway() {
        let err = AppError::Upstream("connection refused".to_string());
        assert_eq!(err.http_status_code(), 502);
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_client_message_hides_internals() {
        let err = AppError::Upstream("secret-host:32400 refused".to_string());
        assert!(!err.client_message().contains("secret-host"));
    }

    #[test]
    fn test_not_found_logs_at_debug() {
        let err = AppError::NotFound("no such part".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.log_level(), LogLevel::Debug);
    }
}
