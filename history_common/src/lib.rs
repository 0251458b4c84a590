//!
//! Historical daily quote fetching shared by the client binary and its tests.
//!
//! This crate aggregates:
//! - `error` — unified error type `HistoryError` used across the workspace.
//! - `result` — handy `Result<T, HistoryError>` alias.
//! - `model` — request, record and series types plus the variation matrix.
//! - `date_format` — `DD-Mon-YY` and ISO date codecs.
//! - `parser` — CSV response parsing with sentinel-filled gaps.
//! - `coverage` — the date coverage heuristic and its diagnostic report.
//! - `net` — request URL construction, the `Transport` seam and its HTTP implementation.
//! - `fetcher` — `HistoricalQuoteFetcher`, the fetch-and-validate routine.
//! - `retry` — opt-in retry wrapper for any `QuoteSource`.
//! - `symbols` — the default symbol table and symbol-list parsing.
#![warn(missing_docs)]
pub mod coverage;
pub mod date_format;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod net;
pub mod parser;
pub mod result;
pub mod retry;
pub mod symbols;

pub use coverage::{CoverageReport, MAX_COVERAGE_SHORTFALL_DAYS};
pub use error::HistoryError;
pub use fetcher::{HistoricalQuoteFetcher, QuoteSource};
pub use model::{QuoteRecord, QuoteRequest, QuoteSeries};
pub use result::Result;
pub use retry::Retry;
pub use symbols::Symbol;
