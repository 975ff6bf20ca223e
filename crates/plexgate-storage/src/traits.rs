//! Storage signing abstraction
//!
//! This module defines the trait the gateway depends on for presigned URL
//! generation, so the HTTP layer never couples to a concrete backend.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Signing failed: {0}")]
    SignFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Presigned URL generation for objects in media storage.
///
/// Failures from this trait are soft for the gateway: a request that cannot
/// be signed is relayed to the origin instead, never answered with an error.
#[async_trait]
pub trait StorageSigner: Send + Sync {
    /// Generate a time-bounded URL granting direct GET access to an object.
    async fn presigned_get_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;
}
