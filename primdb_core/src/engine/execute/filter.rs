use crate::error::DbError;
use crate::parser::command::Filter;
use crate::storage::Schema;
use crate::types::Row;
use crate::types::value::Value;

/// A filter with column names resolved to row positions.
pub(super) struct CompiledFilter<'a> {
    tests: Vec<(usize, &'a Value)>,
}

impl<'a> CompiledFilter<'a> {
    pub(super) fn new(schema: &Schema, filter: Option<&'a Filter>) -> Result<Self, DbError> {
        let mut tests: Vec<(usize, &'a Value)> = Vec::new();
        for p in filter.map(|f| f.predicates.as_slice()).unwrap_or_default() {
            let idx = schema
                .column_index(&p.column)
                .ok_or_else(|| DbError::UnknownColumn(p.column.clone()))?;
            tests.push((idx, &p.value));
        }
        Ok(Self { tests })
    }

    /// Exact equality on every predicate; no filter matches everything.
    pub(super) fn matches(&self, row: &Row) -> bool {
        self.tests
            .iter()
            .all(|(idx, value)| row.get(*idx) == Some(*value))
    }
}

/// Rows matching `filter`, in their original order.
pub fn filter_rows(schema: &Schema, rows: &[Row], filter: Option<&Filter>) -> Result<Vec<Row>, DbError> {
    let compiled = CompiledFilter::new(schema, filter)?;
    Ok(rows.iter().filter(|row| compiled.matches(row)).cloned().collect())
}
