//! History Client — fetches daily price histories for a list of symbols and
//! assembles them for downstream clustering.
//!
//! Symbols come from the built-in table (default), from repeated `--symbol`
//! flags, or from a text file with one qualified symbol per line. They are
//! fetched one after another in sorted order; every history must pass the
//! date coverage check or the run stops with the diagnostic message.
//!
//! Usage example (CLI):
//! ```bash
//! history_client --start 2003-01-01 --end 2008-01-01 --symbol xom --symbol cvx --output quotes.json
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for per-row details.
#![warn(missing_docs)]
mod args;
mod batch;
mod model;

use crate::args::Args;
use crate::batch::fetch_all;
use crate::model::report::BatchReport;
use clap::Parser;
use history_common::symbols::{SymbolParser, sorted_symbols};
use history_common::{HistoricalQuoteFetcher, HistoryError, Result, Retry, Symbol};
use log::{info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

fn main() -> Result<(), HistoryError> {
    init_logger();
    let args = Args::parse();
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            info!("Ctrl+C received. Stopping after the current symbol...");
            shutdown.store(true, Ordering::SeqCst);
        }) {
            warn!("Ctrl+C handler not installed: {}", e);
        }
    }

    if args.start > args.end {
        return Err(HistoryError::InvalidArgument(format!(
            "--start {} is after --end {}",
            args.start, args.end
        )));
    }

    let symbols = resolve_symbols(&args)?;
    if symbols.is_empty() {
        return Err(HistoryError::InvalidArgument(String::from("no symbols to fetch")));
    }
    info!(
        "Fetching {} symbols from {} between {} and {}",
        symbols.len(),
        args.base_url,
        args.start,
        args.end
    );

    let fetcher =
        HistoricalQuoteFetcher::http(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let source = Retry::new(
        fetcher,
        args.retries,
        Duration::from_millis(args.retry_delay_ms),
    );

    let quotes = fetch_all(&source, &symbols, args.start, args.end, &shutdown)?;
    let report = BatchReport::new(args.start, args.end, &symbols, quotes);
    report.log_summary();

    if let Some(output) = &args.output {
        let path = normalize_path(output);
        report.write_json(&path)?;
        info!("Report written to {}", path.display());
    }
    Ok(())
}

/// Symbols to fetch, deduplicated and in fetch order.
fn resolve_symbols(args: &Args) -> Result<Vec<Symbol>> {
    if let Some(raw) = &args.symbols_file {
        let file_path = normalize_path(raw);
        if !is_file_exist(&file_path) {
            return Err(HistoryError::InvalidArgument(format!(
                "symbols file {} does not exist",
                file_path.display()
            )));
        }
        let file = File::open(&file_path)?;
        let symbols = Symbol::parse_from_file(BufReader::new(file))?;
        info!("Symbols from {}: {:?}", file_path.display(), symbols);
        return Ok(sorted_symbols(symbols));
    }

    if args.symbols.is_empty() {
        Ok(Symbol::all())
    } else {
        Ok(sorted_symbols(args.symbols.iter().copied()))
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}
