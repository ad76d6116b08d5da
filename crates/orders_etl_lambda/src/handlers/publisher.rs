use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use orders_etl_core::config::PublisherConfig;
use tracing::info;

use crate::adapters::object_store::ObjectStore;
use crate::handlers::uploader::UploadReceipt;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("parquet file '{}' does not exist", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read parquet file '{}': {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Storage(String),
}

/// Reads the configured Parquet file fully into memory and writes it as one
/// object, overwriting whatever is at the destination.
pub fn publish_parquet(
    config: &PublisherConfig,
    store: &impl ObjectStore,
) -> Result<UploadReceipt, PublishError> {
    let body = fs::read(&config.local_file).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PublishError::SourceNotFound {
            path: config.local_file.clone(),
        },
        _ => PublishError::SourceUnreadable {
            path: config.local_file.clone(),
            source,
        },
    })?;
    let bytes = body.len() as u64;

    store
        .put_object(&config.bucket, &config.key, body)
        .map_err(PublishError::Storage)?;

    info!(
        component = "publisher",
        bucket = %config.bucket,
        key = %config.key,
        bytes,
        "parquet_published"
    );
    Ok(UploadReceipt {
        bucket: config.bucket.clone(),
        key: config.key.clone(),
        bytes,
    })
}
