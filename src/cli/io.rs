//! JSON I/O handling for CLI
//!
//! - Input: one JSON request per stdin line
//! - Output: one JSON response per stdout line
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use super::errors::CliResult;

/// Non-blank input lines, for the serve loop
pub fn read_requests<R: BufRead>(input: R) -> impl Iterator<Item = CliResult<String>> {
    input
        .lines()
        .map(|line| line.map_err(Into::into))
        .filter(|line| !matches!(line, Ok(text) if text.trim().is_empty()))
}

/// Success envelope
pub fn ok_response(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

/// Error envelope
pub fn error_response(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_json(&ok_response(data))
}

/// Write one JSON value as a line to stdout
pub fn write_json(value: &Value) -> CliResult<()> {
    write_json_to(&mut io::stdout().lock(), value)
}

/// Write one JSON value as a line, flushed
pub fn write_json_to<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
