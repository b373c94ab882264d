use crate::engine::cache::QueryCache;
use crate::engine::confirm::Confirm;
use crate::engine::format::help_text;
use crate::engine::output::Output;
use crate::error::DbError;
use crate::parser::command::Command;
use crate::storage::{BlobStore, Catalog};

mod ddl;
mod dml;
mod filter;
mod select;

pub use dml::{delete_rows, insert_row, next_primary_key, update_rows};
pub use filter::filter_rows;

use ddl::{handle_create, handle_drop, handle_info, handle_list};
use dml::{handle_delete, handle_insert, handle_update};
use select::handle_select;

/// Executes a parsed command against the catalog, cache and store.
/// Destructive commands consult `confirm` before touching anything.
pub fn execute_command(
    cmd: Command,
    catalog: &mut Catalog,
    cache: &mut QueryCache,
    store: &mut dyn BlobStore,
    confirm: &mut dyn Confirm,
) -> Result<Output, DbError> {
    match cmd {
        Command::CreateTable { table, columns } => handle_create(table, columns, catalog, store),
        Command::DropTable { table } => handle_drop(table, catalog, cache, store, confirm),
        Command::ListTables => Ok(handle_list(catalog)),
        Command::Insert { table, values } => handle_insert(table, values, catalog, cache, store),
        Command::Select { table, condition } => {
            handle_select(table, condition, catalog, cache, store)
        }
        Command::Update {
            table,
            assignments,
            condition,
        } => handle_update(table, assignments, condition, catalog, cache, store),
        Command::Delete { table, condition } => {
            handle_delete(table, condition, catalog, cache, store, confirm)
        }
        Command::Info { table } => handle_info(table, catalog, store),
        Command::Help => Ok(Output::notice(help_text())),
        Command::Exit => Ok(Output {
            exit: true,
            ..Output::notice("Exiting.")
        }),
    }
}
