use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::fs;

use crate::error::AppError;

/// String-valued key-value persistence, one file per key under the data
/// root. This is the durable substrate for both the trip list and the
/// driver-profile defaults.
#[derive(Clone)]
pub struct KvStore {
    root: Arc<PathBuf>,
}

impl KvStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_structure(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.root()).await?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root().join(key)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.key_path(key);
        if !fs::try_exists(&path).await? {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).await?;
        Ok(Some(raw))
    }

    /// Write-through: the value is on disk before this returns.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.ensure_structure().await?;
        fs::write(self.key_path(key), value).await?;
        Ok(())
    }

    pub async fn remove(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
