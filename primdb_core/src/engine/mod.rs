pub mod cache;
pub mod confirm;
pub mod execute;
pub mod format;
pub mod output;

pub use cache::{FilterKey, QueryCache};
pub use confirm::{Confirm, is_affirmative, request_confirmation};
pub use execute::execute_command;
pub use execute::{delete_rows, filter_rows, insert_row, next_primary_key, update_rows};
pub use format::{format_select, help_text};
pub use output::{Output, ResultSet};
