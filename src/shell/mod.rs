//! Blocking shell command execution.

pub mod command;

pub use command::{execute, execute_check, execute_program, CommandResult};
