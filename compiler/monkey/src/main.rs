//! Monkey CLI
//!
//! `monkey` starts the REPL; `monkey <file>` runs a file.

use std::process::ExitCode;

use monkey::commands::{run_file, start_repl};

fn print_usage() {
    eprintln!("Usage: monkey [file]");
    eprintln!();
    eprintln!("With no arguments, starts an interactive session.");
}

fn main() -> ExitCode {
    monkey::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => match start_repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        [path] => match run_file(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        _ => {
            print_usage();
            ExitCode::from(2)
        }
    }
}
