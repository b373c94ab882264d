use crate::error::DbError;
use crate::parser::command::Command;

use super::Token;

const CREATE_USAGE: &str = "create_table <name> <column:type> [<column:type> ...]";

pub(super) fn parse_create_table(tokens: &[Token]) -> Result<Command, DbError> {
    // create_table <table> <col>:<type> <col>:<type> ...
    if tokens.len() < 3 {
        return Err(DbError::usage(CREATE_USAGE));
    }
    let table = tokens[1].text.clone();

    let mut columns: Vec<String> = Vec::with_capacity(tokens.len() - 2);
    for token in &tokens[2..] {
        parse_column_spec(&token.text)?;
        columns.push(token.text.clone());
    }

    Ok(Command::CreateTable { table, columns })
}

pub(super) fn parse_drop_table(tokens: &[Token]) -> Result<Command, DbError> {
    if tokens.len() != 2 {
        return Err(DbError::usage("drop_table <name>"));
    }
    Ok(Command::DropTable {
        table: tokens[1].text.clone(),
    })
}

pub(super) fn parse_info(tokens: &[Token]) -> Result<Command, DbError> {
    if tokens.len() != 2 {
        return Err(DbError::usage("info <name>"));
    }
    Ok(Command::Info {
        table: tokens[1].text.clone(),
    })
}

/// Splits `name:type` into its trimmed halves. Exactly one `:` is allowed and
/// neither half may be empty; the type name is not checked here.
pub fn parse_column_spec(spec: &str) -> Result<(String, String), DbError> {
    let mut parts = spec.split(':');
    let (Some(name), Some(dtype), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DbError::BadColumnSyntax(spec.to_string()));
    };
    let (name, dtype) = (name.trim(), dtype.trim());
    if name.is_empty() || dtype.is_empty() {
        return Err(DbError::BadColumnSyntax(spec.to_string()));
    }
    Ok((name.to_string(), dtype.to_string()))
}
