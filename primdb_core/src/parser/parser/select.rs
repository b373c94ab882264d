use crate::error::DbError;
use crate::parser::command::Command;

use super::{Token, is_keyword, texts};

const SELECT_USAGE: &str = "select from <name> [where <column> = <value>]";

pub(super) fn parse_select(tokens: &[Token]) -> Result<Command, DbError> {
    // select from <table> [where <col> = <val>]
    if tokens.len() < 3 || !is_keyword(&tokens[1], "from") {
        return Err(DbError::usage(SELECT_USAGE));
    }
    let table = tokens[2].text.clone();

    if tokens.len() == 3 {
        return Ok(Command::Select {
            table,
            condition: None,
        });
    }

    if !is_keyword(&tokens[3], "where") || tokens.len() == 4 {
        return Err(DbError::usage(SELECT_USAGE));
    }

    Ok(Command::Select {
        table,
        condition: Some(texts(&tokens[4..])),
    })
}
