//! Filesystem Image Store
//!
//! Stores listing images on disk under server-generated UUID filenames.
//! Every filename coming back in from the outside is validated before it
//! touches the filesystem - no separators, no dot-dot.

use std::path::PathBuf;

use uuid::Uuid;

use crate::domain::repository::ImageStore;
use crate::error::{CatalogError, CatalogResult};

/// Maximum filename length accepted from clients
const FILENAME_MAX_LENGTH: usize = 128;

/// Disk-backed image store
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a client-supplied filename to a path inside the root
    fn path_for(&self, filename: &str) -> CatalogResult<PathBuf> {
        if !is_safe_filename(filename) {
            return Err(CatalogError::InvalidImage(
                "Invalid image filename".to_string(),
            ));
        }
        Ok(self.root.join(filename))
    }
}

/// Reject anything that could escape the uploads directory
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename.len() <= FILENAME_MAX_LENGTH
        && !filename.contains("..")
        && filename
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

impl ImageStore for FsImageStore {
    async fn save(&self, extension: &str, bytes: &[u8]) -> CatalogResult<String> {
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let path = self.path_for(&filename)?;

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(&path, bytes).await?;

        Ok(filename)
    }

    async fn load(&self, filename: &str) -> CatalogResult<Option<Vec<u8>>> {
        let path = self.path_for(filename)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, filename: &str) -> CatalogResult<bool> {
        let path = self.path_for(filename)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_filenames() {
        assert!(is_safe_filename("abc123.png"));
        assert!(is_safe_filename("f1c2-d3e4_5.jpeg"));
    }

    #[test]
    fn test_unsafe_filenames_rejected() {
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename(".."));
        assert!(!is_safe_filename("../etc/passwd"));
        assert!(!is_safe_filename("a/b.png"));
        assert!(!is_safe_filename("a\\b.png"));
        assert!(!is_safe_filename("evil..png"));
        assert!(!is_safe_filename(&"a".repeat(FILENAME_MAX_LENGTH + 1)));
    }

    #[tokio::test]
    async fn test_save_load_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path());

        let filename = store.save("png", b"fake image bytes").await.unwrap();
        assert!(filename.ends_with(".png"));

        let loaded = store.load(&filename).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(b"fake image bytes".as_slice()));

        assert!(store.remove(&filename).await.unwrap());
        assert!(store.load(&filename).await.unwrap().is_none());

        // Second remove reports nothing deleted
        assert!(!store.remove(&filename).await.unwrap());
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path());

        let loaded = store.load("does-not-exist.png").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsImageStore::new(dir.path());

        assert!(store.load("../outside.png").await.is_err());
        assert!(store.remove("../outside.png").await.is_err());
    }
}
