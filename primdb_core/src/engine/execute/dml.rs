use tracing::info;

use crate::engine::cache::QueryCache;
use crate::engine::confirm::{Confirm, DELETE_ROWS_ACTION, request_confirmation};
use crate::engine::output::Output;
use crate::error::DbError;
use crate::parser::command::{Assignment, Filter};
use crate::parser::parser::parse_where_condition;
use crate::storage::rows::{load_rows, save_rows};
use crate::storage::sequence::Sequences;
use crate::storage::{BlobStore, Catalog, PRIMARY_KEY, Schema};
use crate::types::Row;
use crate::types::value::{Value, convert};

use super::filter::CompiledFilter;

const NO_MATCH: &str = "No records match the condition.";

/// Next key for a table: one past the larger of the biggest key present and
/// the last key ever handed out.
pub fn next_primary_key(rows: &[Row], pk_idx: usize, last_assigned: i64) -> i64 {
    rows.iter()
        .filter_map(|row| row.get(pk_idx).and_then(Value::as_int))
        .max()
        .unwrap_or(0)
        .max(last_assigned)
        + 1
}

/// Appends a row built from `values`, which correspond positionally to the
/// non-key columns. Returns the new row's primary key.
pub fn insert_row(
    schema: &Schema,
    rows: &mut Vec<Row>,
    values: &[String],
    last_assigned: i64,
) -> Result<i64, DbError> {
    let pk_idx = primary_key_index(schema)?;
    let data_columns: Vec<_> = schema.data_columns().collect();
    if values.len() != data_columns.len() {
        return Err(DbError::ValueCountMismatch {
            expected: data_columns.len(),
            got: values.len(),
        });
    }

    let id = next_primary_key(rows, pk_idx, last_assigned);
    let mut row: Row = vec![Value::Int(id); schema.column_count()];
    for ((idx, column), raw) in data_columns.into_iter().zip(values) {
        row[idx] = convert(raw, column.dtype)?;
    }
    rows.push(row);
    Ok(id)
}

/// Applies `assignments` to every row matching `filter`. All assignments are
/// resolved and converted before any row changes. Returns the keys of the
/// updated rows.
pub fn update_rows(
    schema: &Schema,
    rows: &mut [Row],
    assignments: &[Assignment],
    filter: Option<&Filter>,
) -> Result<Vec<i64>, DbError> {
    let pk_idx = primary_key_index(schema)?;
    let compiled = compile_assignments(schema, assignments)?;
    let filter = CompiledFilter::new(schema, filter)?;

    let mut updated: Vec<i64> = Vec::new();
    for row in rows.iter_mut().filter(|row| filter.matches(row)) {
        for (idx, value) in &compiled {
            row[*idx] = value.clone();
        }
        updated.extend(row.get(pk_idx).and_then(Value::as_int));
    }
    Ok(updated)
}

/// Splits `rows` into the ones kept and the keys of the ones removed.
/// Relative order of the kept rows is preserved.
pub fn delete_rows(
    schema: &Schema,
    rows: Vec<Row>,
    filter: Option<&Filter>,
) -> Result<(Vec<Row>, Vec<i64>), DbError> {
    let pk_idx = primary_key_index(schema)?;
    let filter = CompiledFilter::new(schema, filter)?;

    let (removed, kept): (Vec<Row>, Vec<Row>) = rows.into_iter().partition(|row| filter.matches(row));
    let removed_ids = removed
        .iter()
        .filter_map(|row| row.get(pk_idx).and_then(Value::as_int))
        .collect();
    Ok((kept, removed_ids))
}

fn compile_assignments(
    schema: &Schema,
    assignments: &[Assignment],
) -> Result<Vec<(usize, Value)>, DbError> {
    let mut compiled: Vec<(usize, Value)> = Vec::with_capacity(assignments.len());
    for a in assignments {
        let idx = schema
            .column_index(&a.column)
            .ok_or_else(|| DbError::UnknownColumn(a.column.clone()))?;
        let column = &schema.columns[idx];
        if column.is_primary_key() {
            return Err(DbError::ReadOnlyColumn(column.name.clone()));
        }
        compiled.push((idx, convert(&a.value, column.dtype)?));
    }
    Ok(compiled)
}

fn primary_key_index(schema: &Schema) -> Result<usize, DbError> {
    schema
        .primary_key_index()
        .ok_or_else(|| DbError::UnknownColumn(PRIMARY_KEY.to_string()))
}

pub(super) fn handle_insert(
    table: String,
    values: Vec<String>,
    catalog: &Catalog,
    cache: &mut QueryCache,
    store: &mut dyn BlobStore,
) -> Result<Output, DbError> {
    let schema = catalog.schema(&table)?;
    let mut rows = load_rows(store, &table, schema);
    let mut sequences = Sequences::load(store);

    let id = insert_row(schema, &mut rows, &values, sequences.last(&table))?;
    sequences.record(&table, id);
    cache.invalidate(&table);

    save_rows(store, &table, schema, &rows)?;
    sequences.save(store)?;

    info!(table = %table, id, "record inserted");
    Ok(Output::notice(format!(
        "Record with {PRIMARY_KEY}={id} inserted into table \"{table}\"."
    )))
}

pub(super) fn handle_update(
    table: String,
    assignments: Vec<Assignment>,
    condition: Option<Vec<String>>,
    catalog: &Catalog,
    cache: &mut QueryCache,
    store: &mut dyn BlobStore,
) -> Result<Output, DbError> {
    let schema = catalog.schema(&table)?;
    let filter = condition
        .map(|tokens| parse_where_condition(&tokens, schema))
        .transpose()?;

    let mut rows = load_rows(store, &table, schema);
    let updated = update_rows(schema, &mut rows, &assignments, filter.as_ref())?;
    if updated.is_empty() {
        return Ok(Output::notice(NO_MATCH));
    }

    cache.invalidate(&table);
    save_rows(store, &table, schema, &rows)?;

    info!(table = %table, count = updated.len(), "records updated");
    Ok(Output::from_notices(
        updated
            .iter()
            .map(|id| format!("Record with {PRIMARY_KEY}={id} in table \"{table}\" updated."))
            .collect(),
    ))
}

pub(super) fn handle_delete(
    table: String,
    condition: Vec<String>,
    catalog: &Catalog,
    cache: &mut QueryCache,
    store: &mut dyn BlobStore,
    confirm: &mut dyn Confirm,
) -> Result<Output, DbError> {
    let schema = catalog.schema(&table)?;
    let filter = parse_where_condition(&condition, schema)?;
    if let Err(cancelled) = request_confirmation(confirm, DELETE_ROWS_ACTION) {
        return Ok(Output::notice(cancelled));
    }

    let rows = load_rows(store, &table, schema);
    let (kept, removed) = delete_rows(schema, rows, Some(&filter))?;
    if removed.is_empty() {
        return Ok(Output::notice(NO_MATCH));
    }

    cache.invalidate(&table);
    save_rows(store, &table, schema, &kept)?;

    info!(table = %table, count = removed.len(), "records deleted");
    Ok(Output::from_notices(
        removed
            .iter()
            .map(|id| format!("Record with {PRIMARY_KEY}={id} deleted from table \"{table}\"."))
            .collect(),
    ))
}
