//! File-based RecordRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RecordKey, RecordRepository, RepositoryError, Result};

/// File-based implementation of RecordRepository.
///
/// Each record lives in its own `{key}.json` file under `base_dir`.
/// Saves write a sibling `.json.tmp` file and rename it over the record, so
/// a reader never observes a half-written document.
pub struct FileRecordRepository {
    base_dir: PathBuf,
}

impl FileRecordRepository {
    /// Create a new file-based record repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a record file.
    fn record_path(&self, key: RecordKey) -> PathBuf {
        self.base_dir.join(format!("{}.json", key.as_str()))
    }
}

impl RecordRepository for FileRecordRepository {
    fn load(&self, key: RecordKey) -> Result<Option<String>> {
        let path = self.record_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded record '{}' from {}", key.as_str(), path.display());

        Ok(Some(json))
    }

    fn save(&self, key: RecordKey, json: &str) -> Result<()> {
        let path = self.record_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved record '{}' to {}", key.as_str(), path.display());

        Ok(())
    }

    fn delete(&self, key: RecordKey) -> Result<()> {
        let path = self.record_path(key);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::info!("Deleted record: {}", path.display());
        }

        Ok(())
    }

    fn exists(&self, key: RecordKey) -> bool {
        self.record_path(key).exists()
    }
}
