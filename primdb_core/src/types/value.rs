use std::fmt;

use serde_json::Value as JsonValue;

use crate::error::DbError;
use crate::types::datatype::DataType;

/// A typed cell. Ordering and hashing are derived so filters can be used as
/// cache keys; values of different variants never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Int(n) => JsonValue::from(*n),
            Value::Str(s) => JsonValue::from(s.as_str()),
            Value::Bool(b) => JsonValue::from(*b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Trims whitespace, then removes one matching pair of surrounding quotes.
pub fn strip_quotes(raw: &str) -> &str {
    let s = raw.trim();
    if s.len() >= 2 {
        for q in ['"', '\''] {
            if s.starts_with(q) && s.ends_with(q) {
                return &s[1..s.len() - 1];
            }
        }
    }
    s
}

/// Converts a textual token to a value of the declared type.
pub fn convert(raw: &str, dtype: DataType) -> Result<Value, DbError> {
    let token = strip_quotes(raw);
    match dtype {
        DataType::Int => parse_int(token).map(Value::Int),
        DataType::Str => Ok(Value::Str(token.to_string())),
        DataType::Bool => parse_bool(token).map(Value::Bool),
    }
}

/// Converts a stored JSON cell to a value of the declared type. String cells
/// of `str` columns are taken verbatim; only textual numbers and booleans are
/// re-parsed.
pub fn convert_json(raw: &JsonValue, dtype: DataType) -> Result<Value, DbError> {
    match (raw, dtype) {
        (JsonValue::String(s), DataType::Str) => Ok(Value::Str(s.clone())),
        (JsonValue::String(s), _) => convert(s, dtype),
        (JsonValue::Bool(b), DataType::Bool) => Ok(Value::Bool(*b)),
        (JsonValue::Bool(b), DataType::Str) => Ok(Value::Str(b.to_string())),
        (JsonValue::Number(n), DataType::Int) => n
            .as_i64()
            .map(Value::Int)
            .ok_or_else(|| DbError::InvalidValue(n.to_string())),
        (JsonValue::Number(n), DataType::Bool) => match n.as_i64() {
            Some(0) => Ok(Value::Bool(false)),
            Some(1) => Ok(Value::Bool(true)),
            _ => Err(DbError::InvalidValue(n.to_string())),
        },
        (JsonValue::Number(n), DataType::Str) => Ok(Value::Str(n.to_string())),
        (other, _) => Err(DbError::InvalidValue(other.to_string())),
    }
}

fn parse_int(token: &str) -> Result<i64, DbError> {
    // `i64::from_str` tolerates a leading '+'
    if token.starts_with('+') {
        return Err(DbError::InvalidValue(token.to_string()));
    }
    token
        .parse::<i64>()
        .map_err(|_| DbError::InvalidValue(token.to_string()))
}

fn parse_bool(token: &str) -> Result<bool, DbError> {
    match token.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(DbError::InvalidValue(token.to_string())),
    }
}
