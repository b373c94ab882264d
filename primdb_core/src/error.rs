use thiserror::Error;

/// Coarse classification used by the shell to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed command text or quoting.
    Parse,
    /// Semantic violation; nothing was mutated.
    Validation,
    /// Writing or removing a document failed after the in-memory change.
    Persistence,
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("could not parse command ({0})")]
    Parse(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("table \"{0}\" already exists")]
    TableExists(String),
    #[error("table \"{0}\" does not exist")]
    TableNotExists(String),
    #[error("invalid value: no columns given")]
    NoColumns,
    #[error("invalid column definition '{0}', use name:type")]
    BadColumnSyntax(String),
    #[error("invalid type '{0}', use int|str|bool")]
    BadType(String),
    #[error("invalid identifier '{0}'")]
    BadIdentifier(String),
    #[error("column \"{0}\" is declared more than once")]
    DuplicateColumn(String),
    #[error("column \"{0}\" does not exist")]
    UnknownColumn(String),
    #[error("column \"{0}\" is managed automatically and cannot be assigned")]
    ReadOnlyColumn(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("expected {expected} values but got {got}")]
    ValueCountMismatch { expected: usize, got: usize },
    #[error("failed to {action} {target}: {reason}")]
    Persistence {
        action: &'static str,
        target: String,
        reason: String,
    },
}

impl DbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::Parse(_) | DbError::UnknownCommand(_) => ErrorKind::Parse,
            DbError::Persistence { .. } => ErrorKind::Persistence,
            _ => ErrorKind::Validation,
        }
    }

    pub(crate) fn usage(usage: &str) -> Self {
        DbError::Parse(format!("usage: {usage}"))
    }
}
