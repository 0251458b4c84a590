//! Sequential fetch of every requested symbol.
//!
//! Symbols are fetched one at a time, in the order given, through any
//! `QuoteSource`. The first failure ends the batch; a stop request from the
//! operator is honoured between two fetches, never in the middle of one.
use chrono::NaiveDate;
use history_common::{HistoryError, QuoteSeries, QuoteSource, Result, Symbol};
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};

/// Fetch `symbols` in order and collect their histories.
pub fn fetch_all<S: QuoteSource>(
    source: &S,
    symbols: &[Symbol],
    start_date: NaiveDate,
    end_date: NaiveDate,
    shutdown: &AtomicBool,
) -> Result<Vec<QuoteSeries>> {
    let mut quotes = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        if shutdown.load(Ordering::Relaxed) {
            return Err(HistoryError::Interrupted {
                completed: quotes.len(),
                total: symbols.len(),
            });
        }

        let qualified = symbol.to_string();
        info!("Fetching quote history for {:?}", qualified);
        match source.fetch(&qualified, start_date, end_date) {
            Ok(series) => quotes.push(series),
            Err(e) => {
                error!("{}", e);
                return Err(e);
            }
        }
    }
    Ok(quotes)
}
