//! Command-line arguments for the History Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use chrono::NaiveDate;
use clap::Parser;
use history_common::Symbol;
use history_common::net::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use history_common::retry::DEFAULT_RETRY_DELAY_MS;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// First day of the requested history (YYYY-MM-DD).
    #[clap(long, default_value = "2003-01-01")]
    pub start: NaiveDate,

    /// Last day of the requested history (YYYY-MM-DD).
    #[clap(long, default_value = "2008-01-01")]
    pub end: NaiveDate,

    /// Historical prices endpoint the query string is appended to.
    #[clap(long, env = "HISTORY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Fetch only this symbol (by bare ticker, e.g. `xom`). May be repeated.
    #[clap(long = "symbol", value_enum)]
    pub symbols: Vec<Symbol>,

    /// Path to a text file with one qualified symbol (e.g. `NYSE:XOM`) per line.
    #[clap(long, conflicts_with = "symbols")]
    pub symbols_file: Option<String>,

    /// Extra attempts per symbol after a transient failure. 0 disables retrying.
    #[clap(long, default_value_t = 0)]
    pub retries: u32,

    /// Pause between attempts in milliseconds.
    #[clap(long, default_value_t = DEFAULT_RETRY_DELAY_MS)]
    pub retry_delay_ms: u64,

    /// Write the fetched histories and the variation matrix as JSON to this path.
    #[clap(long)]
    pub output: Option<String>,
}
