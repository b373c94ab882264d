use crate::error::DbError;
use crate::parser::command::Command;

mod create;
mod dml;
mod select;
mod split;
mod tokenizer;
mod where_clause;

pub use create::parse_column_spec;
pub use tokenizer::{Token, tokenize};
pub use where_clause::parse_where_condition;

use create::{parse_create_table, parse_drop_table, parse_info};
use dml::{parse_delete, parse_insert, parse_update};
use select::parse_select;

/// Parses one line of shell input into a [`Command`].
pub fn parse(input: &str) -> Result<Command, DbError> {
    let tokens = tokenize(input)?;
    let Some(first) = tokens.first() else {
        return Err(DbError::Parse("empty command".to_string()));
    };

    match first.text.to_lowercase().as_str() {
        "create_table" => parse_create_table(&tokens),
        "drop_table" => parse_drop_table(&tokens),
        "list_tables" => parse_bare(&tokens, Command::ListTables, "list_tables"),
        "insert" => parse_insert(input, &tokens),
        "select" => parse_select(&tokens),
        "update" => parse_update(input, &tokens),
        "delete" => parse_delete(&tokens),
        "info" => parse_info(&tokens),
        "help" => parse_bare(&tokens, Command::Help, "help"),
        "exit" => parse_bare(&tokens, Command::Exit, "exit"),
        _ => Err(DbError::UnknownCommand(first.text.clone())),
    }
}

fn parse_bare(tokens: &[Token], cmd: Command, usage: &str) -> Result<Command, DbError> {
    if tokens.len() != 1 {
        return Err(DbError::usage(usage));
    }
    Ok(cmd)
}

/// True when `token` is the unquoted keyword `kw`, compared case-insensitively.
fn is_keyword(token: &Token, kw: &str) -> bool {
    !token.quoted && token.text.eq_ignore_ascii_case(kw)
}

fn texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.text.clone()).collect()
}
