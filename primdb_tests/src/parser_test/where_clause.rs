use super::*;
use primdb_core::parser::command::Filter;
use primdb_core::parser::parser::parse_where_condition;
use primdb_core::storage::catalog::build_schema;
use primdb_core::storage::Schema;
use primdb_core::types::value::Value;

fn users() -> Schema {
    build_schema(&strings(&["name:str", "age:int", "active:bool"]))
        .unwrap()
        .0
}

#[test]
fn where_converts_value_to_column_type() {
    let schema = users();
    assert_eq!(
        parse_where_condition(&strings(&["age", "=", "30"]), &schema).unwrap(),
        Filter::eq("age", Value::Int(30))
    );
    assert_eq!(
        parse_where_condition(&strings(&["active", "=", "TRUE"]), &schema).unwrap(),
        Filter::eq("active", Value::Bool(true))
    );
}

#[test]
fn where_joins_trailing_tokens_with_spaces() {
    let schema = users();
    let filter = parse_where_condition(&strings(&["name", "=", "Ann", "Lee"]), &schema).unwrap();
    assert_eq!(filter, Filter::eq("name", Value::Str("Ann Lee".to_string())));
}

#[test]
fn where_strips_quotes_left_in_value() {
    let schema = users();
    let filter = parse_where_condition(&strings(&["name", "=", "'Ann'"]), &schema).unwrap();
    assert_eq!(filter, Filter::eq("name", Value::Str("Ann".to_string())));
}

#[test]
fn where_allows_empty_string_value() {
    let schema = users();
    let filter = parse_where_condition(&strings(&["name", "=", ""]), &schema).unwrap();
    assert_eq!(filter, Filter::eq("name", Value::Str(String::new())));
}

#[test]
fn where_unknown_column() {
    let err = parse_where_condition(&strings(&["email", "=", "x"]), &users()).unwrap_err();
    assert!(matches!(err, DbError::UnknownColumn(c) if c == "email"));
}

#[test]
fn where_requires_equals_token() {
    let schema = users();
    for tokens in [
        strings(&["age", ">", "3"]),
        strings(&["age=3"]),
        strings(&["age", "="]),
        strings(&["age"]),
        Vec::new(),
    ] {
        let err = parse_where_condition(&tokens, &schema);
        assert!(
            matches!(err, Err(DbError::InvalidValue(_)) | Err(DbError::UnknownColumn(_))),
            "{tokens:?}"
        );
    }
    assert!(matches!(
        parse_where_condition(&strings(&["age", ">", "3"]), &schema),
        Err(DbError::InvalidValue(_))
    ));
}

#[test]
fn where_value_must_convert() {
    let err = parse_where_condition(&strings(&["age", "=", "old"]), &users()).unwrap_err();
    assert!(matches!(err, DbError::InvalidValue(_)));
}
