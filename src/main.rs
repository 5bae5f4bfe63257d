//! aerolookup CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, prints any error to stderr
//! and exits non-zero on failure. All logic lives in `cli`.

use aerolookup::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
