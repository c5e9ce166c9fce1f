//! Running a source file.

use std::io;

use monkey_eval::{EvalError, Value};
use thiserror::Error;

use crate::{Session, SessionOutcome};

/// Why running a file failed. The CLI prints this and exits with status 1.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{}", read_error_message(.path, .source))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Parse errors rendered as `line:col: message`, one per line.
    #[error("{}", .0.join("\n"))]
    Parse(Vec<String>),
    #[error("ERROR: {0}")]
    Runtime(EvalError),
}

fn read_error_message(path: &str, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}

/// Read and run the file at `path` in a fresh session.
pub fn run_file(path: &str) -> Result<(), RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(path, bytes = source.len(), "running file");
    run_source(&Session::new(), &source)
}

/// Run `source` in `session`, discarding the result unless it is an error.
pub fn run_source(session: &Session, source: &str) -> Result<(), RunError> {
    match session.eval_source(source) {
        SessionOutcome::ParseErrors(errors) => Err(RunError::Parse(
            errors.iter().map(|e| e.render(source)).collect(),
        )),
        SessionOutcome::Value(Value::Error(error)) => Err(RunError::Runtime(error)),
        SessionOutcome::Value(_) | SessionOutcome::NoValue => Ok(()),
    }
}
