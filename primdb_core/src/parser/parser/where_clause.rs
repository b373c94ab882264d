use crate::error::DbError;
use crate::parser::command::Filter;
use crate::storage::Schema;
use crate::types::value::convert;

/// Second parsing stage for `<column> = <value...>` once the table's schema
/// is known. Trailing value tokens are joined with single spaces before the
/// value is converted to the column's declared type.
pub fn parse_where_condition(tokens: &[String], schema: &Schema) -> Result<Filter, DbError> {
    let Some(column_name) = tokens.first() else {
        return Err(DbError::InvalidValue("WHERE".to_string()));
    };
    let column = schema
        .column(column_name)
        .ok_or_else(|| DbError::UnknownColumn(column_name.clone()))?;

    if tokens.get(1).map(String::as_str) != Some("=") || tokens.len() < 3 {
        return Err(DbError::InvalidValue("WHERE".to_string()));
    }

    let raw = tokens[2..].join(" ");
    let value = convert(&raw, column.dtype)?;
    Ok(Filter::eq(column.name.clone(), value))
}
