use tracing::info;

use crate::engine::cache::QueryCache;
use crate::engine::confirm::{Confirm, DROP_TABLE_ACTION, request_confirmation};
use crate::engine::output::Output;
use crate::error::DbError;
use crate::storage::rows::{load_rows, save_rows};
use crate::storage::sequence::Sequences;
use crate::storage::{BlobKey, BlobStore, Catalog};

pub(super) fn handle_create(
    table: String,
    columns: Vec<String>,
    catalog: &mut Catalog,
    store: &mut dyn BlobStore,
) -> Result<Output, DbError> {
    let (schema, mut notices) = catalog.create_table(&table, &columns)?;
    catalog.save(store)?;
    save_rows(store, &table, &schema, &[])?;

    info!(table = %table, columns = %schema.describe(), "table created");
    notices.push(format!(
        "Table \"{}\" created with columns: {}",
        table,
        schema.describe()
    ));
    Ok(Output::from_notices(notices))
}

pub(super) fn handle_drop(
    table: String,
    catalog: &mut Catalog,
    cache: &mut QueryCache,
    store: &mut dyn BlobStore,
    confirm: &mut dyn Confirm,
) -> Result<Output, DbError> {
    catalog.schema(&table)?;
    if let Err(cancelled) = request_confirmation(confirm, DROP_TABLE_ACTION) {
        return Ok(Output::notice(cancelled));
    }

    catalog.drop_table(&table)?;
    cache.invalidate(&table);
    catalog.save(store)?;
    store.remove(BlobKey::Table(&table))?;

    let mut sequences = Sequences::load(store);
    sequences.forget(&table);
    sequences.save(store)?;

    info!(table = %table, "table dropped");
    Ok(Output::notice(format!("Table \"{table}\" dropped.")))
}

pub(super) fn handle_list(catalog: &Catalog) -> Output {
    if catalog.is_empty() {
        return Output::notice("No tables.");
    }
    Output::from_notices(catalog.table_names().map(|name| format!("- {name}")).collect())
}

pub(super) fn handle_info(
    table: String,
    catalog: &Catalog,
    store: &dyn BlobStore,
) -> Result<Output, DbError> {
    let schema = catalog.schema(&table)?;
    let count = load_rows(store, &table, schema).len();
    Ok(Output::from_notices(vec![
        format!("Table: {table}"),
        format!("Columns: {}", schema.describe()),
        format!("Records: {count}"),
    ]))
}
