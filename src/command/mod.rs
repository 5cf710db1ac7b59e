//! Turn-log commands.
//!
//! Each input line is one command. `parse_command` turns a line into a
//! typed `Command`; every grammar rule starts with its own keywords, so a
//! line can match at most one rule.

mod parser;

pub use parser::{parse_command, Command};
