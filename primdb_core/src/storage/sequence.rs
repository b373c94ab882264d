use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::DbError;
use crate::storage::engine::{BlobKey, BlobStore};

/// High-water marks of handed-out primary keys, one per table. Keeps keys
/// from being reused after the rows holding the largest ones are deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequences {
    last: BTreeMap<String, i64>,
}

impl Sequences {
    /// Missing or malformed documents start every table at zero.
    pub fn load(store: &dyn BlobStore) -> Self {
        let content = match store.read(BlobKey::Sequences) {
            Ok(Some(content)) if !content.trim().is_empty() => content,
            Ok(_) => return Self::default(),
            Err(e) => {
                warn!(error = %e, "sequences unreadable, starting from zero");
                return Self::default();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(error = %e, "malformed sequences, starting from zero");
            Self::default()
        })
    }

    pub fn last(&self, table: &str) -> i64 {
        self.last.get(table).copied().unwrap_or(0)
    }

    pub fn record(&mut self, table: &str, id: i64) {
        let slot = self.last.entry(table.to_string()).or_insert(0);
        *slot = (*slot).max(id);
    }

    pub fn forget(&mut self, table: &str) {
        self.last.remove(table);
    }

    pub fn save(&self, store: &mut dyn BlobStore) -> Result<(), DbError> {
        let payload = serde_json::to_string_pretty(self).map_err(|e| DbError::Persistence {
            action: "serialize",
            target: BlobKey::Sequences.to_string(),
            reason: e.to_string(),
        })?;
        store.write(BlobKey::Sequences, &payload)
    }
}
