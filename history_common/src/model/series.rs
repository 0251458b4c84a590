//! Validated per-symbol quote history.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;
use crate::model::quote::QuoteRecord;
use crate::result::Result;

/// Ordered daily records for one symbol, in the order the source returned them.
///
/// A series is built once by the fetcher and then only read; records are never
/// re-sorted or edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSeries {
    symbol: String,
    records: Vec<QuoteRecord>,
}

impl QuoteSeries {
    /// Wrap parsed records for `symbol`.
    pub fn new(symbol: &str, records: Vec<QuoteRecord>) -> Self {
        QuoteSeries {
            symbol: String::from(symbol),
            records,
        }
    }

    /// Symbol the series was fetched for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// All records in source order.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the source returned no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record in source order.
    pub fn first(&self) -> Option<&QuoteRecord> {
        self.records.first()
    }

    /// Last record in source order.
    pub fn last(&self) -> Option<&QuoteRecord> {
        self.records.last()
    }

    /// Earliest and latest record dates, or `None` for an empty series.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// `close - open` for every record, in source order.
    pub fn variations(&self) -> Vec<f64> {
        self.records.iter().map(QuoteRecord::variation).collect()
    }
}

/// Stack the daily variations of every series into a rectangular matrix,
/// one row per series in input order.
///
/// Downstream covariance estimation needs every row to have the same length,
/// so series of different lengths are rejected rather than padded.
pub fn variation_matrix(series: &[QuoteSeries]) -> Result<Vec<Vec<f64>>> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    let width = first.len();

    if let Some(odd) = series.iter().find(|s| s.len() != width) {
        return Err(HistoryError::InvalidArgument(format!(
            "series lengths differ: {} has {} records, {} has {}",
            first.symbol(),
            width,
            odd.symbol(),
            odd.len()
        )));
    }

    Ok(series.iter().map(QuoteSeries::variations).collect())
}
