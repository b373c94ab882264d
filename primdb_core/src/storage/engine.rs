use std::fmt;

use crate::error::DbError;

/// Names one document in a [`BlobStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobKey<'a> {
    /// Table name to column definitions.
    Metadata,
    /// Last primary key handed out per table.
    Sequences,
    /// The row sequence of one table.
    Table(&'a str),
}

impl fmt::Display for BlobKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobKey::Metadata => f.write_str("metadata"),
            BlobKey::Sequences => f.write_str("sequences"),
            BlobKey::Table(name) => write!(f, "tables/{name}"),
        }
    }
}

/// Storage abstraction: opaque text documents addressed by key. Backends
/// decide where the bytes live (files on disk, a map in memory).
pub trait BlobStore {
    /// Returns `None` when the document does not exist.
    fn read(&self, key: BlobKey<'_>) -> Result<Option<String>, DbError>;

    /// Replaces the whole document.
    fn write(&mut self, key: BlobKey<'_>, payload: &str) -> Result<(), DbError>;

    /// Removes the document; removing a missing document is not an error.
    fn remove(&mut self, key: BlobKey<'_>) -> Result<(), DbError>;
}
