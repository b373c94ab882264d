pub mod command;
pub mod parser;

pub use command::{Assignment, Command, Filter, Predicate};
pub use parser::{parse, parse_where_condition};
