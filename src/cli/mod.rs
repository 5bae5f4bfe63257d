//! CLI module for aerolookup
//!
//! Provides command-line interface for:
//! - check: Load configured datasets and report their status
//! - query: One-shot search
//! - start: JSON-lines serve loop over stdin/stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{parse_param, Cli, Command};
pub use commands::{boot, check, handle_request, query, raw_query, run, run_command, serve, start};
pub use errors::{CliError, CliResult};
pub use io::{error_response, ok_response};
