//! Request URL construction and the transport seam used by the fetcher.
//!
//! `Transport` is the only place the fetcher touches the network. The
//! production implementation is a blocking `reqwest` client; tests substitute
//! an in-memory fake.
use std::time::Duration;

use chrono::NaiveDate;
use log::debug;
pub use reqwest::Url;

use crate::date_format::format_iso_date;
use crate::error::HistoryError;
use crate::result::Result;

/// Historical prices endpoint queried when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://finance.google.com/finance/historical";
/// Value of the `output` query parameter selecting the CSV response.
pub const OUTPUT_FORMAT: &str = "csv";
/// Whole-request timeout of the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build `<base>?q=..&startdate=..&enddate=..&output=csv`, percent-encoding
/// every parameter.
pub fn build_request_url(
    base_url: &str,
    symbol: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Url> {
    let start = format_iso_date(start_date);
    let end = format_iso_date(end_date);
    let params = [
        ("q", symbol),
        ("startdate", start.as_str()),
        ("enddate", end.as_str()),
        ("output", OUTPUT_FORMAT),
    ];
    Url::parse_with_params(base_url, &params)
        .map_err(|e| HistoryError::InvalidUrl(format!("{}: {}", base_url, e)))
}

/// Blocking read of a text document.
pub trait Transport {
    /// Fetch the body behind `url`.
    ///
    /// Connection failures, timeouts and non-success statuses are all reported
    /// as [`HistoryError::Network`].
    fn get_text(&self, url: &Url) -> Result<String>;
}

/// `Transport` backed by a blocking `reqwest` client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a client with the given whole-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("history_common/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| HistoryError::Network(format!("failed to build http client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        debug!("GET {} -> {}", url, response.status());
        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn url_carries_parameters_in_order() {
        let url = build_request_url(DEFAULT_BASE_URL, "DELL", ymd(2003, 1, 1), ymd(2008, 1, 1)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://finance.google.com/finance/historical?q=DELL&startdate=2003-01-01&enddate=2008-01-01&output=csv"
        );
    }

    #[test]
    fn symbol_is_percent_encoded() {
        let url = build_request_url("http://localhost/h", "NYSE:TOT", ymd(2003, 1, 1), ymd(2003, 2, 1)).unwrap();
        assert!(url.as_str().contains("q=NYSE%3ATOT&"), "{}", url);
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = build_request_url("not a url", "X", ymd(2003, 1, 1), ymd(2003, 2, 1)).unwrap_err();
        assert!(matches!(err, HistoryError::InvalidUrl(_)));
    }
}
