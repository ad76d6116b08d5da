use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use orders_etl_core::storage_keys::s3_uri;
use tracing::{error, info};

use crate::adapters::object_store::ObjectStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub bucket: String,
    pub key: String,
    pub bytes: u64,
}

impl UploadReceipt {
    pub fn uri(&self) -> String {
        s3_uri(&self.bucket, &self.key)
    }

    pub fn confirmation(&self) -> String {
        format!("Archivo subido: {}", self.uri())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("source file '{}' does not exist", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("source path '{}' is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to read source file '{}': {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Storage(String),
}

/// Uploads the file at `local_path` as the object `bucket`/`key`, overwriting
/// any existing object. The source is checked before the store is touched.
pub fn upload_file(
    local_path: &Path,
    bucket: &str,
    key: &str,
    store: &impl ObjectStore,
) -> Result<UploadReceipt, UploadError> {
    let metadata = fs::metadata(local_path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => UploadError::SourceNotFound {
            path: local_path.to_path_buf(),
        },
        _ => UploadError::SourceUnreadable {
            path: local_path.to_path_buf(),
            source,
        },
    })?;
    if !metadata.is_file() {
        return Err(UploadError::NotAFile {
            path: local_path.to_path_buf(),
        });
    }

    if let Err(message) = store.upload_file(local_path, bucket, key) {
        error!(
            component = "uploader",
            bucket,
            key,
            source = %local_path.display(),
            error = %message,
            "upload_failed"
        );
        return Err(UploadError::Storage(message));
    }

    let receipt = UploadReceipt {
        bucket: bucket.to_string(),
        key: key.to_string(),
        bytes: metadata.len(),
    };
    info!(
        component = "uploader",
        bucket,
        key,
        source = %local_path.display(),
        bytes = receipt.bytes,
        "upload_completed"
    );
    Ok(receipt)
}
