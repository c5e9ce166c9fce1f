//! Command handlers for the `monkey` CLI.

mod repl;
mod run;

pub use repl::{current_user, repl, start_repl, PROMPT};
pub use run::{run_file, run_source, RunError};
