//! One daily row of a historical quote response.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder stored in any numeric field the source left empty, marked with
/// `-`, or sent in a form that does not parse as a number.
pub const MISSING_VALUE: f64 = -1.0;

/// Daily open/high/low/close prices and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Trading day.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl QuoteRecord {
    /// Intraday move, `close - open`.
    ///
    /// Sentinel-filled fields are not treated specially; callers that care
    /// should check [`Self::has_missing_values`] first.
    pub fn variation(&self) -> f64 {
        self.close - self.open
    }

    /// `true` when any numeric field holds [`MISSING_VALUE`].
    pub fn has_missing_values(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .any(|value| *value == MISSING_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(open: f64, close: f64, volume: f64) -> QuoteRecord {
        QuoteRecord {
            date: NaiveDate::from_ymd_opt(2003, 1, 2).unwrap(),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume,
        }
    }

    #[test]
    fn variation_is_close_minus_open() {
        assert!((record(10.0, 12.5, 100.0).variation() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn detects_sentinel_fields() {
        assert!(!record(10.0, 12.5, 100.0).has_missing_values());
        assert!(record(10.0, 12.5, MISSING_VALUE).has_missing_values());
    }
}
