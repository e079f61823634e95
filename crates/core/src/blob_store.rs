//! Poster storage on the local filesystem.
//!
//! Every poster lives directly under one configured directory and is named by
//! the original upload filename. The store does not resolve name collisions;
//! callers check [`BlobStore::exists`] first when overwriting is not wanted.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::CoreError;

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Make sure the poster directory exists and is a directory.
    pub async fn ensure_root(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.root).await?;
        if tokio::fs::metadata(&self.root).await?.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Internal(format!(
                "Poster path '{}' is not a directory",
                self.root.display()
            )))
        }
    }

    /// Write `data` under `filename`, creating the directory if needed.
    ///
    /// Returns the stored filename.
    pub async fn store(&self, filename: &str, data: &[u8]) -> Result<String, CoreError> {
        let path = self.path_for(filename)?;
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(&path, data).await?;
        tracing::debug!(filename, bytes = data.len(), "Stored poster file");
        Ok(filename.to_string())
    }

    /// Read the full contents of `filename`.
    pub async fn retrieve(&self, filename: &str) -> Result<Vec<u8>, CoreError> {
        let path = self.path_for(filename)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CoreError::FileNotFound(filename.to_string()))
            }
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    pub async fn exists(&self, filename: &str) -> Result<bool, CoreError> {
        let path = self.path_for(filename)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }

    /// Remove `filename`. A file that is already gone counts as success.
    ///
    /// Returns `true` if a file was actually removed.
    pub async fn delete_if_exists(&self, filename: &str) -> Result<bool, CoreError> {
        let path = self.path_for(filename)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    /// Resolve `filename` inside the root, rejecting anything that could
    /// escape it.
    fn path_for(&self, filename: &str) -> Result<PathBuf, CoreError> {
        validate_filename(filename)?;
        Ok(self.root.join(filename))
    }
}

/// A poster filename must be a single, plain path component.
pub fn validate_filename(filename: &str) -> Result<(), CoreError> {
    if filename.trim().is_empty() {
        return Err(CoreError::Validation("Filename must not be empty".into()));
    }
    if filename == "." || filename == ".." {
        return Err(CoreError::Validation(format!(
            "Invalid filename '{filename}'"
        )));
    }
    if filename.contains(['/', '\\', '\0']) {
        return Err(CoreError::Validation(format!(
            "Filename '{filename}' must not contain path separators"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn store_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = BlobStore::new(dir.path().join("posters"));

        let name = store.store("dune.png", b"png-bytes").await.expect("store");

        assert_eq!(name, "dune.png");
        let on_disk = std::fs::read(dir.path().join("posters/dune.png")).expect("read back");
        assert_eq!(on_disk, b"png-bytes");
    }

    #[tokio::test]
    async fn store_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = BlobStore::new(dir.path());

        store.store("a.png", b"first").await.expect("store");
        store.store("a.png", b"second").await.expect("store");

        assert_eq!(store.retrieve("a.png").await.expect("retrieve"), b"second");
    }

    #[tokio::test]
    async fn retrieve_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = BlobStore::new(dir.path());

        assert_matches!(
            store.retrieve("nope.png").await,
            Err(CoreError::FileNotFound(name)) if name == "nope.png"
        );
    }

    #[tokio::test]
    async fn delete_if_exists_is_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = BlobStore::new(dir.path());
        store.store("gone.png", b"x").await.expect("store");

        assert!(store.delete_if_exists("gone.png").await.expect("delete"));
        assert!(!store.delete_if_exists("gone.png").await.expect("delete again"));
        assert!(!store.exists("gone.png").await.expect("exists"));
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = BlobStore::new(dir.path());

        assert_matches!(
            store.store("../escape.png", b"x").await,
            Err(CoreError::Validation(_))
        );
        assert_matches!(store.retrieve("..").await, Err(CoreError::Validation(_)));
        assert_matches!(store.exists("").await, Err(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn ensure_root_creates_missing_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = BlobStore::new(dir.path().join("nested/posters"));

        store.ensure_root().await.expect("ensure root");

        assert!(dir.path().join("nested/posters").is_dir());
    }

    #[tokio::test]
    async fn ensure_root_fails_when_path_is_a_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file_path = dir.path().join("not-a-dir");
        std::fs::write(&file_path, b"x").expect("write file");

        let store = BlobStore::new(file_path.clone());

        assert!(store.ensure_root().await.is_err());
    }
}
