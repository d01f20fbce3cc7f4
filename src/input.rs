//! Operator input: the sales row count.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

pub const ROWS_PROMPT: &str = "Enter number of sales rows to generate: ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid row count {0:?}: expected a whole number of zero or more")]
    InvalidRowCount(String),
    #[error("no row count entered")]
    Cancelled,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Parse an operator-supplied row count. Zero is valid; negative or
/// non-numeric values are not.
pub fn parse_row_count(text: &str) -> Result<u64, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| InputError::InvalidRowCount(trimmed.to_string()))
}

/// Ask the operator for the row count.
///
/// Uses a line editor on an interactive terminal. When stdin is piped the
/// prompt goes to stderr, keeping stdout for the report.
pub fn prompt_row_count() -> Result<u64, InputError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut editor = DefaultEditor::new().map_err(readline_to_input)?;
        let line = editor.readline(ROWS_PROMPT).map_err(readline_to_input)?;
        parse_row_count(&line)
    } else {
        read_row_count_prompted(stdin.lock(), io::stderr())
    }
}

/// Write [`ROWS_PROMPT`] to `prompt`, then read the row count from `reader`
pub fn read_row_count_prompted<R: BufRead, W: Write>(
    reader: R,
    mut prompt: W,
) -> Result<u64, InputError> {
    prompt.write_all(ROWS_PROMPT.as_bytes())?;
    prompt.flush()?;
    read_row_count(reader)
}

/// Read the row count from the first line of `reader`
pub fn read_row_count<R: BufRead>(mut reader: R) -> Result<u64, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Cancelled);
    }
    parse_row_count(&line)
}

fn readline_to_input(err: ReadlineError) -> InputError {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => InputError::Cancelled,
        ReadlineError::Io(e) => InputError::Io(e),
        other => InputError::Io(io::Error::other(other.to_string())),
    }
}
