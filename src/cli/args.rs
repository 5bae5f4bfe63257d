//! CLI argument definitions using clap
//!
//! Commands:
//! - aerolookup check --config <path>
//! - aerolookup query --config <path> --dataset <name> [--param key=value]...
//! - aerolookup start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aerolookup - indexed prefix search over airport, airline and aircraft data
#[derive(Parser, Debug)]
#[command(name = "aerolookup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load every configured dataset and print a summary
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./aerolookup.json")]
        config: PathBuf,
    },

    /// Run one search and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./aerolookup.json")]
        config: PathBuf,

        /// Dataset to search (airports, airlines, aircraft)
        #[arg(long)]
        dataset: String,

        /// Query parameter, repeatable
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Serve JSON-lines requests from stdin
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./aerolookup.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Splits `key=value` on the first `=`. The value may be empty.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}
