mod commands;
pub mod output;

pub use commands::{Cli, Commands, run_command};
pub use output::error_message;
