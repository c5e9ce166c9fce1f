//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use monkey_parse::ParseError;

use crate::{Session, SessionOutcome};

pub const PROMPT: &str = ">> ";

/// Name used in the greeting: `USER`, then `USERNAME`, then a fallback.
pub fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

/// Run the REPL on stdin/stdout until end of input.
pub fn start_repl() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(stdin.lock(), &mut stdout.lock(), &Session::new(), &current_user())
}

/// Read lines from `input`, evaluate each in `session`, and write results to
/// `output`. Returns at end of input.
pub fn repl<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    session: &Session,
    user: &str,
) -> io::Result<()> {
    writeln!(output, "Hello {user}! This is the Monkey programming language!")?;
    writeln!(output, "Feel free to type in commands")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match session.eval_source(&line) {
            SessionOutcome::ParseErrors(errors) => print_parser_errors(output, &errors)?,
            SessionOutcome::Value(value) => writeln!(output, "{value}")?,
            SessionOutcome::NoValue => {}
        }
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    writeln!(output, "parser errors:")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
