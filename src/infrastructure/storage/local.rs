// src/infrastructure/storage/local.rs
use super::{encode, error::map_io, new_blob_name};
use crate::{
    application::{ApplicationResult, ports::storage::KebabStore},
    domain::kebab::Kebab,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};

/// Blob store backed by a directory on the local filesystem. The directory
/// plays the role of the container and is created on first write.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    container: PathBuf,
}

impl LocalBlobStore {
    pub fn new(container: impl Into<PathBuf>) -> Self {
        Self {
            container: container.into(),
        }
    }

    pub fn container(&self) -> &Path {
        &self.container
    }

    async fn write_new(&self, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.container).await?;

        let path = self.container.join(name);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        Ok(path)
    }
}

#[async_trait]
impl KebabStore for LocalBlobStore {
    async fn store(&self, kebab: &Kebab) -> ApplicationResult<()> {
        let bytes = encode(kebab)?;
        let name = new_blob_name();

        let path = self.write_new(&name, &bytes).await.map_err(map_io)?;
        tracing::debug!(path = %path.display(), "kebab written to local blob store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kebab::{KebabInput, KebabSlug};

    fn kebab(input: &str, result: &str) -> Kebab {
        Kebab::new(
            KebabInput::new(input).unwrap(),
            KebabSlug::new(result).unwrap(),
        )
    }

    #[tokio::test]
    async fn creates_container_and_writes_one_blob_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path().join("kebabs"));

        store.store(&kebab("x y", "x-y")).await.unwrap();
        store.store(&kebab("x y", "x-y")).await.unwrap();

        let mut names = Vec::new();
        let mut entries = fs::read_dir(store.container()).await.unwrap();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            let contents = fs::read_to_string(entry.path()).await.unwrap();
            assert_eq!(contents, r#"{"Input":"x y","Result":"x-y"}"#);
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|name| name.ends_with(".json")));
        assert_ne!(names[0], names[1]);
    }

    #[tokio::test]
    async fn never_overwrites_existing_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());

        store.write_new("taken.json", b"first").await.unwrap();
        let err = store.write_new("taken.json", b"second").await.unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
        let contents = fs::read_to_string(dir.path().join("taken.json")).await.unwrap();
        assert_eq!(contents, "first");
    }

    #[tokio::test]
    async fn unwritable_container_is_a_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();
        let store = LocalBlobStore::new(blocker.join("kebabs"));

        let err = store.store(&kebab("x y", "x-y")).await.unwrap_err();
        assert!(!err.is_client_error());
    }
}
