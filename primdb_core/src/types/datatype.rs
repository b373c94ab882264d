use std::fmt;

use crate::error::DbError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Str,
    Bool,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Str => "str",
            DataType::Bool => "bool",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn parse_datatype(s: &str) -> Result<DataType, DbError> {
    match s.trim().to_lowercase().as_str() {
        "int" => Ok(DataType::Int),
        "str" => Ok(DataType::Str),
        "bool" => Ok(DataType::Bool),
        _ => Err(DbError::BadType(s.trim().to_string())),
    }
}
