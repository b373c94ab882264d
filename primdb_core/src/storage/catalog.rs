use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::error::DbError;
use crate::parser::parser::parse_column_spec;
use crate::storage::engine::{BlobKey, BlobStore};
use crate::storage::schema::{Column, PRIMARY_KEY, Schema, is_identifier};
use crate::types::datatype::{DataType, parse_datatype};

/// Manages table schemas (metadata catalog). Tables keep the order in which
/// they were created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: Vec<(String, Schema)>,
}

impl Catalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if a table exists in the catalog
    pub fn exists(&self, table: &str) -> bool {
        self.tables.iter().any(|(name, _)| name == table)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    /// Retrieves the schema for a given table
    pub fn schema(&self, table: &str) -> Result<&Schema, DbError> {
        self.tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, schema)| schema)
            .ok_or_else(|| DbError::TableNotExists(table.to_string()))
    }

    /// Registers a table from `name:type` column specs. Returns the final
    /// schema together with any notices raised while building it.
    pub fn create_table(
        &mut self,
        table: &str,
        specs: &[String],
    ) -> Result<(Schema, Vec<String>), DbError> {
        if self.exists(table) {
            return Err(DbError::TableExists(table.to_string()));
        }
        if !is_identifier(table) {
            return Err(DbError::BadIdentifier(table.to_string()));
        }
        let (schema, notices) = build_schema(specs)?;
        self.tables.push((table.to_string(), schema.clone()));
        Ok((schema, notices))
    }

    /// Removes a table, returning its schema.
    pub fn drop_table(&mut self, table: &str) -> Result<Schema, DbError> {
        let idx = self
            .tables
            .iter()
            .position(|(name, _)| name == table)
            .ok_or_else(|| DbError::TableNotExists(table.to_string()))?;
        Ok(self.tables.remove(idx).1)
    }

    /// Serializes to the metadata document: `{"table": ["ID:int", ...], ...}`.
    pub fn to_json(&self) -> Result<String, DbError> {
        let mut doc = Map::new();
        for (name, schema) in &self.tables {
            doc.insert(name.clone(), JsonValue::from(schema.definitions()));
        }
        serde_json::to_string_pretty(&JsonValue::Object(doc)).map_err(|e| DbError::Persistence {
            action: "serialize",
            target: BlobKey::Metadata.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parses the metadata document. Entries that do not describe a valid
    /// table are skipped.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let doc: Map<String, JsonValue> = serde_json::from_str(content)?;
        let mut catalog = Self::new();
        for (name, entry) in doc {
            let specs: Vec<String> = match serde_json::from_value(entry) {
                Ok(specs) => specs,
                Err(e) => {
                    warn!(table = %name, error = %e, "skipping malformed catalog entry");
                    continue;
                }
            };
            if let Err(e) = catalog.create_table(&name, &specs) {
                warn!(table = %name, error = %e, "skipping invalid catalog entry");
            }
        }
        Ok(catalog)
    }

    /// Loads the catalog from the store. A missing, unreadable or malformed
    /// document yields an empty catalog.
    pub fn load(store: &dyn BlobStore) -> Self {
        let content = match store.read(BlobKey::Metadata) {
            Ok(Some(content)) => content,
            Ok(None) => return Self::new(),
            Err(e) => {
                warn!(error = %e, "metadata unreadable, starting empty");
                return Self::new();
            }
        };
        if content.trim().is_empty() {
            return Self::new();
        }
        Self::from_json(&content).unwrap_or_else(|e| {
            warn!(error = %e, "malformed metadata, starting empty");
            Self::new()
        })
    }

    pub fn save(&self, store: &mut dyn BlobStore) -> Result<(), DbError> {
        store.write(BlobKey::Metadata, &self.to_json()?)
    }
}

/// Builds a schema from `name:type` specs. The primary-key column is
/// synthesized in front when absent; a user-declared one is renamed to the
/// canonical spelling and forced to `int`, staying where it was declared.
pub fn build_schema(specs: &[String]) -> Result<(Schema, Vec<String>), DbError> {
    if specs.is_empty() {
        return Err(DbError::NoColumns);
    }

    let mut notices: Vec<String> = Vec::new();
    let mut columns: Vec<Column> = Vec::with_capacity(specs.len() + 1);

    for spec in specs {
        let (name, type_name) = parse_column_spec(spec)?;
        if !is_identifier(&name) {
            return Err(DbError::BadIdentifier(name));
        }

        let column = if name.eq_ignore_ascii_case(PRIMARY_KEY) {
            if parse_datatype(&type_name).ok() != Some(DataType::Int) {
                notices.push(format!(
                    "Column \"{PRIMARY_KEY}\" only supports type {int}. Type \"{type_name}\" replaced with \"{int}\".",
                    int = DataType::Int
                ));
            }
            Column::new(PRIMARY_KEY, DataType::Int)
        } else {
            Column::new(name, parse_datatype(&type_name)?)
        };

        if columns
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&column.name))
        {
            return Err(DbError::DuplicateColumn(column.name));
        }
        columns.push(column);
    }

    if !columns.iter().any(Column::is_primary_key) {
        columns.insert(0, Column::new(PRIMARY_KEY, DataType::Int));
    }

    Ok((Schema::new(columns), notices))
}
