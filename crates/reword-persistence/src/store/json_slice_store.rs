use async_trait::async_trait;
use reword_core::{RewordError, RewordResult};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::traits::SliceStore;

/// JSON file-backed slice store: one `<key>.json` file per slice under a
/// data directory. Slices never share a file, so reading or writing one
/// never touches another.
#[derive(Debug, Clone)]
pub struct JsonSliceStore {
    dir: PathBuf,
}

impl JsonSliceStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slice_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Write-to-temp-then-rename so a crash mid-write can never leave a
    /// slice file half-written. The temp file lives in the same directory
    /// to keep the rename on one filesystem.
    async fn write_atomic(&self, path: &Path, bytes: &[u8]) -> RewordResult<()> {
        fs::create_dir_all(&self.dir).await?;

        let temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        let temp_path = temp.path().to_path_buf();
        fs::write(&temp_path, bytes).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl SliceStore for JsonSliceStore {
    async fn read_value(&self, key: &str) -> RewordResult<Option<Value>> {
        let path = self.slice_path(key);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            RewordError::Serialization(format!("slice '{key}' at {}: {e}", path.display()))
        })?;

        tracing::debug!("Read slice '{}' ({} bytes)", key, bytes.len());
        Ok(Some(value))
    }

    async fn write_value(&self, key: &str, value: Value) -> RewordResult<()> {
        let bytes = serde_json::to_vec_pretty(&value)
            .map_err(|e| RewordError::Serialization(e.to_string()))?;

        self.write_atomic(&self.slice_path(key), &bytes)
            .await
            .map_err(|e| RewordError::StorageWrite {
                slice: key.to_string(),
                reason: e.to_string(),
            })
    }
}
