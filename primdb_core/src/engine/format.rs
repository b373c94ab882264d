use crate::engine::output::ResultSet;

/// Command usages and their one-line descriptions, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    (
        "create_table <name> <column:type> ...",
        "create a table (the ID:int column is added automatically)",
    ),
    ("list_tables", "list all tables"),
    ("drop_table <name>", "drop a table"),
    ("insert into <name> values (...)", "add a record"),
    ("select from <name>", "show all records"),
    ("select from <name> where column = value", "show records matching a condition"),
    ("update <name> set column = value [where ...]", "update records matching a condition"),
    ("delete from <name> where column = value", "delete records matching a condition"),
    ("info <name>", "show the schema and record count"),
    ("help", "show this help"),
    ("exit", "leave the program"),
];

/// Help listing with descriptions aligned on the longest usage.
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|(usage, desc)| format!("  {usage:<width$}  - {desc}")),
    );
    lines.join("\n")
}

/// Formats a SELECT result as a tab-separated table
pub fn format_select(result: &ResultSet) -> String {
    let header = result.columns.join("\t");

    if result.rows.is_empty() {
        return header;
    }

    let row_lines = result
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, row_lines)
}
