use tracing::info;

pub const DROP_TABLE_ACTION: &str = "drop table";
pub const DELETE_ROWS_ACTION: &str = "delete rows";

/// Asks the user whether a destructive action may proceed.
pub trait Confirm {
    fn confirm(&mut self, action: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, action: &str) -> bool {
        self(action)
    }
}

/// Only a literal `y` (any case, surrounding whitespace ignored) proceeds.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// First phase of a destructive command. Returns the cancellation notice
/// when the user declines.
pub fn request_confirmation(confirm: &mut dyn Confirm, action: &str) -> Result<(), String> {
    if confirm.confirm(action) {
        Ok(())
    } else {
        info!(action, "action cancelled by user");
        Err(format!("Action '{action}' cancelled by user."))
    }
}
