use std::io::{self, Write};

use anyhow::Context;
use primdb_core::engine::{format_select, help_text, is_affirmative};
use primdb_core::{Config, Database, DbError, ErrorKind, Output};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">>> Enter command: ";
const PARSE_HINT: &str = "Check the syntax and quoting.";

/// Asks on stdin; anything but `y` declines, as does end of input.
fn confirm_on_stdin(action: &str) -> bool {
    print!("Are you sure you want to perform \"{action}\"? [y/n]: ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&answer),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = Config::from_env();
    if let Some(dir) = std::env::args().nth(1) {
        config.data_dir = dir.into();
    }
    let data_dir = config.data_dir.clone();
    let mut db = Database::open(config)
        .with_context(|| format!("failed to open database at {}", data_dir.display()))?;

    println!("primdb is running (type 'help' or 'exit')");
    println!("{}", help_text());

    let mut confirm = confirm_on_stdin;
    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(_) => {
                println!("Failed to read input");
                continue;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match db.execute(input, &mut confirm) {
            Ok(out) => {
                print_output(&out);
                if out.exit {
                    break;
                }
            }
            Err(err) => print_error(&err),
        }
    }

    Ok(())
}

fn print_output(out: &Output) {
    for notice in &out.notices {
        println!("{notice}");
    }
    if let Some(result) = &out.result {
        println!("{}", format_select(result));
    }
}

fn print_error(err: &DbError) {
    match (err, err.kind()) {
        (DbError::UnknownCommand(cmd), _) => println!("Unknown command '{cmd}'. Try again."),
        (_, ErrorKind::Parse) => {
            println!("Error: {err}.");
            println!("{PARSE_HINT}");
        }
        (_, ErrorKind::Validation) => println!("Error: {err}."),
        (_, ErrorKind::Persistence) => {
            tracing::error!(error = %err, "persistence failure");
            println!("Error: {err}. The change may not have been saved.");
        }
    }
}
