use crate::engine::cache::QueryCache;
use crate::engine::output::{Output, ResultSet};
use crate::error::DbError;
use crate::parser::parser::parse_where_condition;
use crate::storage::rows::load_rows;
use crate::storage::{BlobStore, Catalog};

use super::filter::filter_rows;

pub(super) fn handle_select(
    table: String,
    condition: Option<Vec<String>>,
    catalog: &Catalog,
    cache: &mut QueryCache,
    store: &dyn BlobStore,
) -> Result<Output, DbError> {
    let schema = catalog.schema(&table)?;
    let filter = condition
        .map(|tokens| parse_where_condition(&tokens, schema))
        .transpose()?;
    let key = QueryCache::key(filter.as_ref());

    let rows = match cache.get(&table, &key) {
        Some(rows) => rows,
        None => {
            let all = load_rows(store, &table, schema);
            let selected = filter_rows(schema, &all, filter.as_ref())?;
            cache.insert(&table, key, selected.clone());
            selected
        }
    };

    Ok(Output::rows(ResultSet {
        columns: schema.columns.iter().map(|c| c.name.clone()).collect(),
        rows,
    }))
}
