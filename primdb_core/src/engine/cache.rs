use std::collections::HashMap;

use tracing::debug;

use crate::parser::command::Filter;
use crate::types::Row;
use crate::types::value::Value;

/// Canonical form of a filter: `None` for "all rows", otherwise the
/// predicates sorted by column then value.
pub type FilterKey = Option<Vec<(String, Value)>>;

/// Memoized SELECT results, grouped by table so a mutation can drop every
/// entry of its table at once.
#[derive(Debug, Default)]
pub struct QueryCache {
    tables: HashMap<String, HashMap<FilterKey, Vec<Row>>>,
    hits: u64,
    misses: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(filter: Option<&Filter>) -> FilterKey {
        let filter = filter.filter(|f| !f.is_empty())?;
        let mut pairs: Vec<(String, Value)> = filter
            .predicates
            .iter()
            .map(|p| (p.column.clone(), p.value.clone()))
            .collect();
        pairs.sort();
        pairs.dedup();
        Some(pairs)
    }

    /// Returns a copy of the cached snapshot, if any.
    pub fn get(&mut self, table: &str, key: &FilterKey) -> Option<Vec<Row>> {
        let found = self
            .tables
            .get(table)
            .and_then(|entries| entries.get(key))
            .cloned();
        match found {
            Some(rows) => {
                self.hits += 1;
                debug!(table, rows = rows.len(), "query cache hit");
                Some(rows)
            }
            None => {
                self.misses += 1;
                debug!(table, "query cache miss");
                None
            }
        }
    }

    pub fn insert(&mut self, table: &str, key: FilterKey, rows: Vec<Row>) {
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(key, rows);
    }

    /// Drops every entry for `table`, returning how many were removed.
    pub fn invalidate(&mut self, table: &str) -> usize {
        let dropped = self.tables.remove(table).map_or(0, |entries| entries.len());
        if dropped > 0 {
            debug!(table, dropped, "query cache invalidated");
        }
        dropped
    }

    pub fn contains(&self, table: &str, key: &FilterKey) -> bool {
        self.tables
            .get(table)
            .is_some_and(|entries| entries.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
