use super::{StorageError, StorageSink, StoredFile};
use async_trait::async_trait;
use log::info;
use serde_json::json;
use std::path::PathBuf;

/// Writes each submission as a file below a fixed directory.
///
/// The directory is created on first use. An existing file with the same
/// name is overwritten; names carry a millisecond timestamp so this only
/// happens for duplicate submits within the same millisecond.
pub struct LocalDirectorySink {
    dir: PathBuf,
}

impl LocalDirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl StorageSink for LocalDirectorySink {
    fn name(&self) -> &'static str {
        "local"
    }

    fn success_message(&self) -> &'static str {
        "Datei erfolgreich gespeichert"
    }

    async fn store(&self, file_name: &str, content: Vec<u8>) -> Result<StoredFile, StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, &content).await?;

        let location = path.display().to_string();
        info!("Wrote {} bytes to {}", content.len(), location);
        Ok(StoredFile {
            details: json!({ "path": location, "size": content.len() }),
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn creates_directory_and_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads").join("2025");
        let sink = LocalDirectorySink::new(&dir);

        let stored = sink
            .store("Linsenbestellung_4711_x.csv", b"a,b\n".to_vec())
            .await
            .unwrap();

        let written = std::fs::read(dir.join("Linsenbestellung_4711_x.csv")).unwrap();
        assert_eq!(written, b"a,b\n");
        assert_eq!(stored.details["size"], 4);
        assert!(stored.location.ends_with("Linsenbestellung_4711_x.csv"));
    }

    #[actix_web::test]
    async fn filesystem_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        // a regular file where the directory should be
        let blocker = tmp.path().join("uploads");
        std::fs::write(&blocker, b"").unwrap();
        let sink = LocalDirectorySink::new(&blocker);

        let err = sink.store("x.csv", Vec::new()).await.unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
