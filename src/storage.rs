//! Image storage
//!
//! Uploaded image bytes live outside the database; `property_medias` rows
//! reference them by path. The trait is the seam between the service layer
//! and the file backend.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{AppError, AppResult};

/// File backend for uploaded property images
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist image bytes under `key`, returning the stored path
    async fn put(&self, key: &str, bytes: &[u8]) -> AppResult<PathBuf>;

    /// Remove a stored image. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Build the storage key for a media row from its id and original file name.
/// Anything that could escape the storage root is flattened out of the name.
pub fn media_key(media_id: &str, file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}", media_id, sanitized)
}

/// Stores images under a root directory on the local filesystem
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::Storage(format!("Failed to create media directory: {}", e))
            })?;
        }
        fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to store image: {}", e)))?;
        Ok(path)
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("Failed to remove image: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_remove_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        let path = store.put("media-1_front.jpg", b"image bytes").await.unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"image bytes");

        store.remove("media-1_front.jpg").await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn removing_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        assert!(store.remove("never-stored.png").await.is_ok());
    }

    #[test]
    fn media_key_flattens_unsafe_names() {
        assert_eq!(media_key("m-1", "front view.jpg"), "m-1_front_view.jpg");
        assert_eq!(media_key("m-1", "../../etc/passwd"), "m-1_.._.._etc_passwd");
    }
}
