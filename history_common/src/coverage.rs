//! Date coverage heuristic applied to every fetched series.
//!
//! A history is accepted only when all of its dates fall inside the requested
//! range and the observed range is at most [`MAX_COVERAGE_SHORTFALL_DAYS`]
//! shorter than the requested one. An empty history takes the extreme
//! representable dates as its bounds, which always fails the check.
use std::fmt;

use chrono::NaiveDate;

use crate::model::{QuoteRecord, QuoteRequest};

/// How many days the observed span may fall short of the requested span.
///
/// Absorbs weekends and market holidays at either end of the range; the value
/// is inherited from the reference heuristic and is not derived from a
/// calendar.
pub const MAX_COVERAGE_SHORTFALL_DAYS: i64 = 7;

/// Requested versus observed date bounds of one fetch.
///
/// `Display` renders every field so the message can be handed to an operator
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Symbol that was requested.
    pub symbol: String,
    /// Full request URL, query string included.
    pub url: String,
    /// Requested first day.
    pub start_date: NaiveDate,
    /// Requested last day.
    pub end_date: NaiveDate,
    /// Earliest date in the response, `NaiveDate::MIN` when it had no rows.
    pub min_date: NaiveDate,
    /// Latest date in the response, `NaiveDate::MAX` when it had no rows.
    pub max_date: NaiveDate,
    /// `end_date - start_date` in days.
    pub requested_span: i64,
    /// `max_date - min_date` in days.
    pub observed_span: i64,
}

impl CoverageReport {
    /// Measure `records` against `request`.
    pub fn new(request: &QuoteRequest, url: &str, records: &[QuoteRecord]) -> Self {
        let min_date = records
            .iter()
            .map(|r| r.date)
            .min()
            .unwrap_or(NaiveDate::MIN);
        let max_date = records
            .iter()
            .map(|r| r.date)
            .max()
            .unwrap_or(NaiveDate::MAX);

        CoverageReport {
            symbol: request.symbol.clone(),
            url: String::from(url),
            start_date: request.start_date,
            end_date: request.end_date,
            min_date,
            max_date,
            requested_span: request.requested_span_days(),
            observed_span: (max_date - min_date).num_days(),
        }
    }

    /// Whether the observed bounds look like a complete history.
    pub fn is_plausible(&self) -> bool {
        let in_range = |date: NaiveDate| self.start_date <= date && date <= self.end_date;

        in_range(self.min_date)
            && in_range(self.max_date)
            && self.requested_span - MAX_COVERAGE_SHORTFALL_DAYS <= self.observed_span
            && self.observed_span <= self.requested_span
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data looks wrong for symbol {}, url {}\n  \
             - start_date: {}, end_date: {}\n  \
             - min_date:   {}, max_date: {}\n  \
             - requested_span: {}, observed_span: {}",
            self.symbol,
            self.url,
            self.start_date,
            self.end_date,
            self.min_date,
            self.max_date,
            self.requested_span,
            self.observed_span
        )
    }
}

/// Run the heuristic and turn a failing report into an error.
pub fn check_coverage(
    request: &QuoteRequest,
    url: &str,
    records: &[QuoteRecord],
) -> Result<CoverageReport, CoverageReport> {
    let report = CoverageReport::new(request, url, records);
    if report.is_plausible() {
        Ok(report)
    } else {
        Err(report)
    }
}
