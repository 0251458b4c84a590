//! Fetch-and-validate routine for one symbol's daily history.
//!
//! A fetch builds the request URL, reads the body through the injected
//! [`Transport`], parses the rows and runs the coverage heuristic. Every
//! failure is returned to the caller; nothing is retried here (see
//! [`crate::retry::Retry`] for an opt-in wrapper).
use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, info};

use crate::coverage::check_coverage;
use crate::model::{QuoteRequest, QuoteSeries};
use crate::net::{HttpTransport, Transport, build_request_url};
use crate::parser::parse_history_csv;
use crate::result::Result;

/// Anything that can produce a validated history for a symbol and date range.
pub trait QuoteSource {
    /// Fetch the daily history of `symbol` between `start_date` and
    /// `end_date`, both inclusive.
    fn fetch(&self, symbol: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<QuoteSeries>;
}

/// Fetches daily histories from a CSV endpoint and rejects implausible ones.
pub struct HistoricalQuoteFetcher<T: Transport> {
    transport: T,
    base_url: String,
}

impl HistoricalQuoteFetcher<HttpTransport> {
    /// Fetcher over a blocking HTTP client.
    pub fn http(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(timeout)?, base_url))
    }
}

impl<T: Transport> HistoricalQuoteFetcher<T> {
    /// Fetcher reading through `transport` from `base_url`.
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: String::from(base_url),
        }
    }

    /// Run one fetch for `request`.
    pub fn fetch_request(&self, request: &QuoteRequest) -> Result<QuoteSeries> {
        let url = build_request_url(
            &self.base_url,
            &request.symbol,
            request.start_date,
            request.end_date,
        )?;
        info!("{}", url);

        let body = self.transport.get_text(&url)?;
        let records = parse_history_csv(body.as_bytes())?;
        let report = check_coverage(request, url.as_str(), &records)?;
        debug!(
            "{}: {} records, {} .. {} (span {} of {})",
            request.symbol,
            records.len(),
            report.min_date,
            report.max_date,
            report.observed_span,
            report.requested_span
        );

        Ok(QuoteSeries::new(&request.symbol, records))
    }
}

impl<T: Transport> QuoteSource for HistoricalQuoteFetcher<T> {
    fn fetch(&self, symbol: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<QuoteSeries> {
        self.fetch_request(&QuoteRequest::new(symbol, start_date, end_date))
    }
}
