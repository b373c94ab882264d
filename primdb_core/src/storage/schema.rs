use crate::types::datatype::DataType;

/// Name of the auto-managed primary-key column.
pub const PRIMARY_KEY: &str = "ID";

/// Represents a single column in a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub dtype: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.name == PRIMARY_KEY
    }

    /// The `name:type` form used in the metadata document and notices.
    pub fn definition(&self) -> String {
        format!("{}:{}", self.name, self.dtype)
    }
}

/// Represents the schema of a table (ordered list of columns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key_index(&self) -> Option<usize> {
        self.columns.iter().position(Column::is_primary_key)
    }

    /// Columns the user supplies values for, with their positions.
    pub fn data_columns(&self) -> impl Iterator<Item = (usize, &Column)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_primary_key())
    }

    pub fn definitions(&self) -> Vec<String> {
        self.columns.iter().map(Column::definition).collect()
    }

    /// Comma-separated column definitions, e.g. `ID:int, name:str`.
    pub fn describe(&self) -> String {
        self.definitions().join(", ")
    }
}

/// Table and column names: an ASCII letter or `_`, then letters, digits or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
