//! Opt-in retry wrapper around a [`QuoteSource`].
//!
//! The fetcher itself never retries. Callers that expect the remote side to
//! fail intermittently (empty or truncated histories, dropped connections) can
//! wrap it in [`Retry`], which re-runs transient failures after a fixed pause.
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use log::warn;

use crate::fetcher::QuoteSource;
use crate::model::QuoteSeries;
use crate::result::Result;

/// Pause between attempts when none is configured.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;

/// Re-runs transient failures of the wrapped source.
pub struct Retry<S: QuoteSource> {
    inner: S,
    retries: u32,
    delay: Duration,
}

impl<S: QuoteSource> Retry<S> {
    /// Allow up to `retries` additional attempts, sleeping `delay` before each.
    pub fn new(inner: S, retries: u32, delay: Duration) -> Self {
        Self {
            inner,
            retries,
            delay,
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: QuoteSource> QuoteSource for Retry<S> {
    fn fetch(&self, symbol: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<QuoteSeries> {
        let mut attempt = 0;
        loop {
            match self.inner.fetch(symbol, start_date, end_date) {
                Ok(series) => return Ok(series),
                Err(e) if e.is_transient() && attempt < self.retries => {
                    attempt += 1;
                    warn!(
                        "Fetch for {} failed (attempt {} of {}): {}",
                        symbol,
                        attempt,
                        self.retries + 1,
                        e
                    );
                    thread::sleep(self.delay);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
