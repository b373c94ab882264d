use crate::error::DbError;
use crate::parser::command::{Assignment, Command};

use super::split::{split_assignments, split_values};
use super::{Token, is_keyword, texts};

const INSERT_USAGE: &str = "insert into <name> values (<value>, <value>, ...)";
const UPDATE_USAGE: &str =
    "update <name> set <column> = <value>[, <column> = <value> ...] [where <column> = <value>]";
const DELETE_USAGE: &str = "delete from <name> where <column> = <value>";

pub(super) fn parse_insert(input: &str, tokens: &[Token]) -> Result<Command, DbError> {
    // insert into <table> values (<v1>, <v2>, ...)
    if tokens.len() < 5 || !is_keyword(&tokens[1], "into") || !is_keyword(&tokens[3], "values") {
        return Err(DbError::usage(INSERT_USAGE));
    }
    let table = tokens[2].text.clone();

    // The raw span keeps the user's quotes so commas inside them survive.
    let list = input[tokens[4].start..].trim();
    let Some(inner) = list.strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return Err(DbError::usage(INSERT_USAGE));
    };

    let values = split_values(inner);
    if values.is_empty() {
        return Err(DbError::usage(INSERT_USAGE));
    }

    Ok(Command::Insert { table, values })
}

pub(super) fn parse_update(input: &str, tokens: &[Token]) -> Result<Command, DbError> {
    // update <table> set <col> = <val>[, <col> = <val> ...] [where <col> = <val>]
    if tokens.len() < 4 || !is_keyword(&tokens[2], "set") {
        return Err(DbError::usage(UPDATE_USAGE));
    }
    let table = tokens[1].text.clone();

    let where_idx = tokens
        .iter()
        .skip(3)
        .position(|t| is_keyword(t, "where"))
        .map(|i| i + 3);

    let (set_segment, condition) = match where_idx {
        Some(idx) => {
            if idx == 3 {
                return Err(DbError::usage(UPDATE_USAGE));
            }
            let condition = &tokens[idx + 1..];
            if condition.is_empty() {
                return Err(DbError::usage(UPDATE_USAGE));
            }
            (&input[tokens[3].start..tokens[idx].start], Some(texts(condition)))
        }
        None => (&input[tokens[3].start..], None),
    };

    let pieces = split_assignments(set_segment);
    if pieces.is_empty() {
        return Err(DbError::usage(UPDATE_USAGE));
    }

    let mut assignments: Vec<Assignment> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let Some((column, value)) = piece.split_once('=') else {
            return Err(DbError::usage(UPDATE_USAGE));
        };
        let (column, value) = (column.trim(), value.trim());
        if column.is_empty() || value.is_empty() {
            return Err(DbError::usage(UPDATE_USAGE));
        }
        assignments.push(Assignment {
            column: column.to_string(),
            value: value.to_string(),
        });
    }

    Ok(Command::Update {
        table,
        assignments,
        condition,
    })
}

pub(super) fn parse_delete(tokens: &[Token]) -> Result<Command, DbError> {
    // delete from <table> where <col> = <val>
    if tokens.len() < 5 || !is_keyword(&tokens[1], "from") || !is_keyword(&tokens[3], "where") {
        return Err(DbError::usage(DELETE_USAGE));
    }
    Ok(Command::Delete {
        table: tokens[2].text.clone(),
        condition: texts(&tokens[4..]),
    })
}
