//! Storage signer setup and initialization

use anyhow::Result;
use plexgate_core::Config;
use plexgate_storage::{S3Storage, StorageSigner};
use std::sync::Arc;

/// Build the S3 signer from configuration.
pub fn setup_signer(config: &Config) -> Result<Arc<dyn StorageSigner>> {
    let region = config
        .s3_region
        .clone()
        .or_else(|| config.aws_region.clone())
        .ok_or_else(|| anyhow::anyhow!("S3_REGION or AWS_REGION must be set"))?;

    let signer = S3Storage::new(
        config.s3_bucket.clone(),
        region,
        config.s3_endpoint.clone(),
    )?;

    tracing::info!(bucket = %config.s3_bucket, "Storage signer initialized");

    Ok(Arc::new(signer))
}
