//! Destinations for generated CSV files.
//!
//! Exactly one sink is active per process, chosen by `LINSEN_STORAGE`:
//! - `local`: `LocalDirectorySink` writes into the uploads directory.
//! - `workdrive`: `WorkDriveSink` exchanges the refresh token for an access
//!   token and uploads the file into the configured WorkDrive folder.
//!
//! Both sinks make a single attempt. Failures bubble up as `StorageError`
//! with the underlying OS or vendor message attached.

mod local;
mod workdrive;

pub use local::LocalDirectorySink;
pub use workdrive::WorkDriveSink;

use crate::config::{Config, SinkKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to get access token: {0}")]
    Auth(String),
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("{0}")]
    Setup(String),
}

/// What a sink reports back about a stored file.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Path on disk or vendor resource id, for logging.
    pub location: String,
    /// Returned to the form as `fileDetails`.
    pub details: serde_json::Value,
}

#[async_trait]
pub trait StorageSink: Send + Sync {
    fn name(&self) -> &'static str;

    /// Message shown to the recipient after a successful store.
    fn success_message(&self) -> &'static str;

    async fn store(&self, file_name: &str, content: Vec<u8>) -> Result<StoredFile, StorageError>;
}

/// Creates the sink selected in `config`.
pub fn build_sink(config: &Config) -> Result<Arc<dyn StorageSink>, StorageError> {
    match config.sink {
        SinkKind::Local => Ok(Arc::new(LocalDirectorySink::new(config.upload_dir.clone()))),
        SinkKind::WorkDrive => {
            let settings = config.workdrive.clone().ok_or_else(|| {
                StorageError::Setup("WorkDrive storage selected without credentials".to_string())
            })?;
            Ok(Arc::new(WorkDriveSink::new(settings, config.http_timeout)?))
        }
    }
}
