use crate::types::Row;

/// Rows returned by a SELECT, with the column names they line up with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// What one command produced: user-facing notices, an optional result set,
/// and whether the shell should stop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Output {
    pub notices: Vec<String>,
    pub result: Option<ResultSet>,
    pub exit: bool,
}

impl Output {
    pub fn notice(msg: impl Into<String>) -> Self {
        Self::from_notices(vec![msg.into()])
    }

    pub fn from_notices(notices: Vec<String>) -> Self {
        Self {
            notices,
            ..Self::default()
        }
    }

    pub fn rows(result: ResultSet) -> Self {
        Self {
            result: Some(result),
            ..Self::default()
        }
    }
}
