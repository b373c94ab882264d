use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::error::DbError;
use crate::storage::engine::{BlobKey, BlobStore};
use crate::storage::schema::Schema;
use crate::types::Row;
use crate::types::value::convert_json;

/// Decodes a table document: a JSON array of flat objects keyed by column
/// name. Every schema column must be present; unknown keys are ignored.
pub fn decode_rows(content: &str, schema: &Schema) -> Result<Vec<Row>, String> {
    let objects: Vec<Map<String, JsonValue>> =
        serde_json::from_str(content).map_err(|e| format!("malformed table JSON: {e}"))?;

    let mut rows: Vec<Row> = Vec::with_capacity(objects.len());
    for (row_no, object) in objects.iter().enumerate() {
        let mut row: Row = Vec::with_capacity(schema.column_count());
        for col in &schema.columns {
            let cell = object
                .get(&col.name)
                .ok_or_else(|| format!("row {} is missing column '{}'", row_no + 1, col.name))?;
            let value = convert_json(cell, col.dtype)
                .map_err(|e| format!("row {} column '{}': {e}", row_no + 1, col.name))?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Encodes rows as a pretty-printed JSON array, columns in schema order.
pub fn encode_rows(rows: &[Row], schema: &Schema) -> Result<String, DbError> {
    let objects: Vec<JsonValue> = rows
        .iter()
        .map(|row| {
            let object: Map<String, JsonValue> = schema
                .columns
                .iter()
                .zip(row)
                .map(|(col, value)| (col.name.clone(), value.to_json()))
                .collect();
            JsonValue::Object(object)
        })
        .collect();
    serde_json::to_string_pretty(&objects).map_err(|e| DbError::Persistence {
        action: "serialize",
        target: "rows".to_string(),
        reason: e.to_string(),
    })
}

/// Loads a table's rows. A missing, unreadable or malformed document is
/// treated as an empty table.
pub fn load_rows(store: &dyn BlobStore, table: &str, schema: &Schema) -> Vec<Row> {
    let content = match store.read(BlobKey::Table(table)) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(table, error = %e, "table data unreadable, treating as empty");
            return Vec::new();
        }
    };
    if content.trim().is_empty() {
        return Vec::new();
    }
    decode_rows(&content, schema).unwrap_or_else(|e| {
        warn!(table, error = %e, "table data malformed, treating as empty");
        Vec::new()
    })
}

pub fn save_rows(
    store: &mut dyn BlobStore,
    table: &str,
    schema: &Schema,
    rows: &[Row],
) -> Result<(), DbError> {
    let payload = encode_rows(rows, schema)?;
    store.write(BlobKey::Table(table), &payload)
}
