//! Error types shared by the fetcher library and the client binary.
//!
//! `HistoryError` separates the three ways a single fetch can fail (transport,
//! malformed row, implausible date coverage) from the plumbing errors raised by
//! the client around it (I/O, JSON, argument checks).
use std::io;

use thiserror::Error;

use crate::coverage::CoverageReport;

/// Unified error type for fetching and assembling quote histories.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// I/O error originating from files or the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport failure: connection, timeout, non-success status or body read.
    #[error("Network error: {0}")]
    Network(String),

    /// A data row could not be decomposed into a date and five numeric fields.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the response body (the header is line 1).
        line: u64,
        /// What was wrong with the row.
        message: String,
    },

    /// The parsed series failed the date coverage heuristic.
    #[error("{0}")]
    DataIntegrity(Box<CoverageReport>),

    /// The request URL could not be built from the base endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Error while parsing the symbols file into `Symbol` values.
    #[error("Parse symbols file error: {0}")]
    ParseSymbolsFile(String),

    /// Caller supplied arguments that cannot be acted on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The run was stopped by the operator before every symbol was fetched.
    #[error("Interrupted after {completed} of {total} symbols")]
    Interrupted {
        /// Symbols fetched before the stop was observed.
        completed: usize,
        /// Symbols scheduled for the run.
        total: usize,
    },
}

impl HistoryError {
    /// Whether a later attempt of the same fetch might succeed.
    ///
    /// Transport failures and empty or truncated histories are often temporary
    /// on the remote side; a malformed row or a bad URL will fail the same way
    /// every time.
    pub fn is_transient(&self) -> bool {
        matches!(self, HistoryError::Network(_) | HistoryError::DataIntegrity(_))
    }
}

impl From<reqwest::Error> for HistoryError {
    fn from(err: reqwest::Error) -> Self {
        HistoryError::Network(err.to_string())
    }
}

impl From<CoverageReport> for HistoryError {
    fn from(report: CoverageReport) -> Self {
        HistoryError::DataIntegrity(Box::new(report))
    }
}
