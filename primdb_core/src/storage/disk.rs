use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::DbError;
use crate::storage::engine::{BlobKey, BlobStore};

/// File-backed store: one JSON file per document under the configured
/// data directory.
#[derive(Debug, Clone)]
pub struct DiskStore {
    config: Config,
}

impl DiskStore {
    /// Opens the store, creating the directory layout if needed.
    pub fn open(config: Config) -> Result<Self, DbError> {
        initialize_layout(&config.tables_dir())?;
        debug!(data_dir = %config.data_dir.display(), "disk store opened");
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn path(&self, key: BlobKey<'_>) -> PathBuf {
        match key {
            BlobKey::Metadata => self.config.meta_path(),
            BlobKey::Sequences => self.config.sequences_path(),
            BlobKey::Table(name) => self.config.table_path(name),
        }
    }
}

impl BlobStore for DiskStore {
    fn read(&self, key: BlobKey<'_>) -> Result<Option<String>, DbError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(persistence_error("read", &path, e)),
        }
    }

    fn write(&mut self, key: BlobKey<'_>, payload: &str) -> Result<(), DbError> {
        let path = self.path(key);
        fs::write(&path, payload).map_err(|e| persistence_error("write", &path, e))
    }

    fn remove(&mut self, key: BlobKey<'_>) -> Result<(), DbError> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(persistence_error("remove", &path, e)),
        }
    }
}

fn initialize_layout(tables_dir: &Path) -> Result<(), DbError> {
    fs::create_dir_all(tables_dir).map_err(|e| persistence_error("create", tables_dir, e))
}

fn persistence_error(action: &'static str, path: &Path, e: std::io::Error) -> DbError {
    DbError::Persistence {
        action,
        target: path.display().to_string(),
        reason: e.to_string(),
    }
}
