use crate::types::value::Value;

/// One `column = value` pair from an UPDATE's SET list, value still raw.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

/// A single equality test against a converted value.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub value: Value,
}

/// Conjunction of equality predicates. An empty filter matches every row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    pub predicates: Vec<Predicate>,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: Value) -> Self {
        Self::default().and(column, value)
    }

    pub fn and(mut self, column: impl Into<String>, value: Value) -> Self {
        self.predicates.push(Predicate {
            column: column.into(),
            value,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// A parsed shell command. WHERE conditions are kept as raw tokens until the
/// target table's schema is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateTable {
        table: String,
        columns: Vec<String>,
    },
    DropTable {
        table: String,
    },
    ListTables,
    Insert {
        table: String,
        values: Vec<String>,
    },
    Select {
        table: String,
        condition: Option<Vec<String>>,
    },
    Update {
        table: String,
        assignments: Vec<Assignment>,
        condition: Option<Vec<String>>,
    },
    Delete {
        table: String,
        condition: Vec<String>,
    },
    Info {
        table: String,
    },
    Help,
    Exit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateTable { .. } => "create_table",
            Command::DropTable { .. } => "drop_table",
            Command::ListTables => "list_tables",
            Command::Insert { .. } => "insert",
            Command::Select { .. } => "select",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
            Command::Info { .. } => "info",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}
