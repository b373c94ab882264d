use std::time::Instant;

use tracing::debug;

pub mod config;
pub mod engine;
pub mod error;
pub mod parser;
pub mod storage;
pub mod types;

pub use config::Config;
pub use engine::{Confirm, Output, QueryCache, ResultSet};
pub use error::{DbError, ErrorKind};

use parser::command::Command;
use storage::{BlobStore, Catalog, DiskStore};

/// A database session: the store, the catalog as last read from it, and the
/// process-local query cache.
///
/// The catalog is re-read from the store before every command, so changes
/// made to the metadata document between commands are picked up.
#[derive(Debug)]
pub struct Database<S: BlobStore = DiskStore> {
    store: S,
    catalog: Catalog,
    cache: QueryCache,
}

impl Database<DiskStore> {
    /// Opens the file-backed database described by `config`.
    pub fn open(config: Config) -> Result<Self, DbError> {
        Ok(Self::with_store(DiskStore::open(config)?))
    }
}

impl<S: BlobStore> Database<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            catalog: Catalog::new(),
            cache: QueryCache::new(),
        }
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, input: &str, confirm: &mut dyn Confirm) -> Result<Output, DbError> {
        let cmd = parser::parse(input)?;
        self.run(cmd, confirm)
    }

    /// Runs an already parsed command.
    pub fn run(&mut self, cmd: Command, confirm: &mut dyn Confirm) -> Result<Output, DbError> {
        self.reload();
        let name = cmd.name();
        let started = Instant::now();
        let result = engine::execute_command(
            cmd,
            &mut self.catalog,
            &mut self.cache,
            &mut self.store,
            confirm,
        );
        debug!(
            command = name,
            ok = result.is_ok(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "command finished"
        );
        result
    }

    /// Re-reads the catalog from the store.
    pub fn reload(&mut self) {
        self.catalog = Catalog::load(&self.store);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
