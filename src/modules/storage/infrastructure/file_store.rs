use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::modules::storage::domain::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};

/// Durable store keeping one `<key>.json` file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the store directory
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::StorageError(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        log::debug!("File store opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::StorageError(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        // Write-then-rename so readers never observe a partial value
        let written = write_synced(&tmp_path, value).and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(AppError::StorageError(format!(
                "Failed to write {}: {}",
                path.display(),
                e
            )));
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
