pub mod catalog;
pub mod disk;
pub mod engine;
pub mod mem;
pub mod rows;
pub mod schema;
pub mod sequence;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use disk::DiskStore;
pub use engine::{BlobKey, BlobStore};
pub use mem::MemStore;
pub use schema::{Column, PRIMARY_KEY, Schema};
