//! Data model for historical quote requests and their results.
//!
//! - `request` — `QuoteRequest`, the symbol and date range of a single fetch.
//! - `quote` — `QuoteRecord`, one daily OHLCV row with sentinel-filled gaps.
//! - `series` — `QuoteSeries`, the validated per-symbol result, and the
//!   variation matrix assembled from a batch of series.
pub mod quote;
pub mod request;
pub mod series;

pub use quote::{MISSING_VALUE, QuoteRecord};
pub use request::QuoteRequest;
pub use series::{QuoteSeries, variation_matrix};
