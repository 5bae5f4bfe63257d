//! CLI command implementations
//!
//! Every command boots the same way: load and validate the config, apply the
//! log level, build the engine, load each configured dataset file. A dataset
//! that fails to load aborts startup.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::config::EngineConfig;
use crate::dataset::loader;
use crate::engine::SearchEngine;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::query::RawQuery;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{error_response, ok_response, read_requests, write_json_to, write_response};

const BAD_REQUEST: &str = "LOOKUP_BAD_REQUEST";

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Check { config } => check(&config),
        Command::Query {
            config,
            dataset,
            params,
        } => query(&config, &dataset, params),
        Command::Start { config } => start(&config),
    }
}

/// Loads every configured dataset and prints the engine status
pub fn check(config_path: &Path) -> CliResult<()> {
    let (_, engine) = boot(config_path)?;
    write_response(serde_json::to_value(engine.stats())?)
}

/// Runs one search and prints the page
pub fn query(config_path: &Path, dataset: &str, params: Vec<(String, String)>) -> CliResult<()> {
    let (_, engine) = boot(config_path)?;
    let params: RawQuery = params.into_iter().collect();
    let page = engine.search(dataset, &params)?;
    write_response(serde_json::to_value(&*page)?)
}

/// Serves JSON-lines requests from stdin until end of input
pub fn start(config_path: &Path) -> CliResult<()> {
    let (config, engine) = boot(config_path)?;
    serve(&engine, &config, io::stdin().lock(), &mut io::stdout().lock())
}

/// Answers each input line with exactly one output line.
///
/// A malformed request gets an error response; only an I/O failure stops
/// the loop. Nothing but responses is written to `output`.
pub fn serve<R: BufRead, W: Write>(
    engine: &SearchEngine,
    config: &EngineConfig,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    log_event(Event::ServeStart);

    for line in read_requests(input) {
        let line = line?;
        let response = match serde_json::from_str::<Value>(&line) {
            Ok(request) => handle_request(engine, config, &request),
            Err(e) => error_response(BAD_REQUEST, &format!("invalid JSON: {}", e)),
        };
        write_json_to(output, &response)?;
    }

    log_event(Event::ServeStop);
    Ok(())
}

/// Loads config and datasets into a fresh engine
pub fn boot(config_path: &Path) -> CliResult<(EngineConfig, SearchEngine)> {
    let config = EngineConfig::load(config_path)?;
    Logger::set_min_severity(config.severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", config_path.display().to_string().as_str())],
    );

    let engine = SearchEngine::new(&config);
    for (kind, path) in config.dataset_paths() {
        let records = loader::read_records(&path)?;
        engine.load_dataset(kind.name(), records)?;
    }

    Ok((config, engine))
}

/// Answers one serve-loop request.
///
/// - `{"dataset": "...", "params": {...}}` searches
/// - `{"op": "stats"}` reports engine status
/// - `{"op": "reload", "dataset": "..."}` re-reads the dataset's configured file
pub fn handle_request(engine: &SearchEngine, config: &EngineConfig, request: &Value) -> Value {
    let Some(request) = request.as_object() else {
        return error_response(BAD_REQUEST, "request must be a JSON object");
    };

    let result = match request.get("op").and_then(Value::as_str).unwrap_or("search") {
        "search" => handle_search(engine, request),
        "stats" => serde_json::to_value(engine.stats()).map_err(CliError::from),
        "reload" => handle_reload(engine, config, request),
        other => return error_response(BAD_REQUEST, &format!("unknown op '{}'", other)),
    };

    match result {
        Ok(data) => ok_response(data),
        Err(err) => error_response(err.code(), &err.to_string()),
    }
}

fn handle_search(engine: &SearchEngine, request: &Map<String, Value>) -> CliResult<Value> {
    let dataset = request.get("dataset").and_then(Value::as_str).unwrap_or("");
    let params = request
        .get("params")
        .and_then(Value::as_object)
        .map(raw_query)
        .unwrap_or_default();

    let page = engine.search(dataset, &params)?;
    Ok(serde_json::to_value(&*page)?)
}

fn handle_reload(
    engine: &SearchEngine,
    config: &EngineConfig,
    request: &Map<String, Value>,
) -> CliResult<Value> {
    let name = request.get("dataset").and_then(Value::as_str).unwrap_or("");
    let kind = engine.resolve(name)?;

    let records = match config.dataset_path(kind) {
        Some(path) => loader::read_records(&path)?,
        None => {
            return Ok(json!({
                "dataset": kind.name(),
                "reloaded": false,
                "reason": "no path configured"
            }))
        }
    };

    let summary = engine.reload(kind.name(), records)?;
    Ok(json!({
        "dataset": kind.name(),
        "reloaded": true,
        "snapshot": summary
    }))
}

/// Stringifies scalar JSON parameters. Nulls, arrays and objects are dropped.
pub fn raw_query(params: &Map<String, Value>) -> RawQuery {
    params
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), value))
        })
        .collect()
}
