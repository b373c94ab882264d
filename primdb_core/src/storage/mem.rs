use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::DbError;
use crate::storage::engine::{BlobKey, BlobStore};

/// In-memory store. Counts reads per key so callers can observe how often a
/// document was fetched.
#[derive(Debug, Default)]
pub struct MemStore {
    docs: HashMap<String, String>,
    reads: RefCell<HashMap<String, usize>>,
    fail_writes: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `read` calls made for `key` so far.
    pub fn reads(&self, key: BlobKey<'_>) -> usize {
        self.reads
            .borrow()
            .get(&key.to_string())
            .copied()
            .unwrap_or(0)
    }

    pub fn get(&self, key: BlobKey<'_>) -> Option<&str> {
        self.docs.get(&key.to_string()).map(String::as_str)
    }

    /// Places a document directly, bypassing write failures.
    pub fn put(&mut self, key: BlobKey<'_>, payload: impl Into<String>) {
        self.docs.insert(key.to_string(), payload.into());
    }

    /// Makes every subsequent `write` and `remove` fail.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_writable(&self, action: &'static str, key: BlobKey<'_>) -> Result<(), DbError> {
        if self.fail_writes {
            return Err(DbError::Persistence {
                action,
                target: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        Ok(())
    }
}

impl BlobStore for MemStore {
    fn read(&self, key: BlobKey<'_>) -> Result<Option<String>, DbError> {
        let name = key.to_string();
        *self.reads.borrow_mut().entry(name.clone()).or_insert(0) += 1;
        Ok(self.docs.get(&name).cloned())
    }

    fn write(&mut self, key: BlobKey<'_>, payload: &str) -> Result<(), DbError> {
        self.check_writable("write", key)?;
        self.docs.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&mut self, key: BlobKey<'_>) -> Result<(), DbError> {
        self.check_writable("remove", key)?;
        self.docs.remove(&key.to_string());
        Ok(())
    }
}
