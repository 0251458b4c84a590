//! A single historical quote request.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Symbol and inclusive date range for one fetch.
///
/// `start_date <= end_date` is expected but not checked here: a reversed range
/// can never pass the coverage heuristic, so the fetch fails on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Ticker identifier passed through to the remote source (e.g. `NYSE:XOM`).
    pub symbol: String,
    /// First calendar day of the requested range.
    pub start_date: NaiveDate,
    /// Last calendar day of the requested range.
    pub end_date: NaiveDate,
}

impl QuoteRequest {
    /// Creates a new request.
    pub fn new(symbol: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        QuoteRequest {
            symbol: String::from(symbol),
            start_date,
            end_date,
        }
    }

    /// Number of days between the requested bounds.
    pub fn requested_span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
