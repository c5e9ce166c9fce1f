//! Monkey front end.
//!
//! Ties the lexer, parser, macro expander and evaluator together into a
//! `Session`, and provides the two ways of driving one: running a file and
//! the interactive REPL.

pub mod commands;
mod session;

pub use session::{Session, SessionOutcome};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=monkey_eval=debug`. Logs go to stderr so they never mix with
/// program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
