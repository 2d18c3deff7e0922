use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{error, instrument};

use crate::domain::{common::entities::app_errors::CoreError, store::ports::KeyValueStore};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            error!(dir = %dir.display(), error = %e, "Failed to create data directory");
            CoreError::StorageError(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CoreError::Invalid(format!("invalid storage key: {key:?}")));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read value");
                Err(CoreError::StorageError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let tmp_path = self.dir.join(format!("{key}.json.tmp"));

        tokio::fs::write(&tmp_path, value.as_bytes())
            .await
            .map_err(|e| {
                error!(path = %tmp_path.display(), error = %e, "Failed to write value");
                CoreError::StorageError(format!("Failed to write {}: {}", tmp_path.display(), e))
            })?;

        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to replace value");
            CoreError::StorageError(format!("Failed to replace {}: {}", path.display(), e))
        })
    }
}
