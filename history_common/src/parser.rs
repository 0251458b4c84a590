//! Parser for the comma-separated history response.
//!
//! The body is a header line followed by `date,open,high,low,close,volume`
//! rows. The date column uses the `DD-Mon-YY` form; numeric columns are decimal
//! text or a `-` placeholder. Missing or unreadable numbers become
//! [`MISSING_VALUE`]; a row with the wrong number of columns or an unreadable
//! date fails the whole parse. Quotes carry no meaning: a comma always
//! separates fields.
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::date_format::parse_short_date;
use crate::error::HistoryError;
use crate::model::{MISSING_VALUE, QuoteRecord};
use crate::result::Result;

/// Columns expected in every data row.
pub const FIELD_COUNT: usize = 6;
/// Placeholder the source writes for a value it does not have.
pub const MISSING_PLACEHOLDER: &str = "-";

const NUMERIC_COLUMNS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// Parse a full response body, skipping its header line.
pub fn parse_history_csv<R: Read>(reader: R) -> Result<Vec<QuoteRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| HistoryError::Parse {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        records.push(parse_row(&row)?);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord) -> Result<QuoteRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    if row.len() != FIELD_COUNT {
        return Err(HistoryError::Parse {
            line,
            message: format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
        });
    }

    let date = parse_short_date(&row[0]).map_err(|e| HistoryError::Parse {
        line,
        message: format!("invalid date {:?}: {}", &row[0], e),
    })?;

    let mut values = [MISSING_VALUE; 5];
    for (idx, column) in NUMERIC_COLUMNS.iter().enumerate() {
        let raw = &row[idx + 1];
        match parse_field(raw) {
            Some(value) => values[idx] = value,
            None => debug!("line {}: {} {:?} filled with {}", line, column, raw, MISSING_VALUE),
        }
    }
    let [open, high, low, close, volume] = values;

    Ok(QuoteRecord {
        date,
        open,
        high,
        low,
        close,
        volume,
    })
}

fn parse_field(raw: &str) -> Option<f64> {
    match raw.trim() {
        "" | MISSING_PLACEHOLDER => None,
        value => value.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HEADER: &str = "\u{feff}Date,Open,High,Low,Close,Volume\n";

    fn parse(body: &str) -> Result<Vec<QuoteRecord>> {
        parse_history_csv(body.as_bytes())
    }

    #[test]
    fn parses_rows_in_source_order() {
        let body = format!(
            "{}31-Dec-07,92.10,93.00,91.50,92.80,12000100\n28-Dec-07,91.00,92.20,90.80,92.00,9800000\n",
            HEADER
        );
        let records = parse(&body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2007, 12, 31).unwrap());
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2007, 12, 28).unwrap());
        assert!((records[0].close - 92.80).abs() < 1e-9);
        assert!((records[1].volume - 9_800_000.0).abs() < 1e-9);
    }

    #[test]
    fn placeholder_volume_becomes_sentinel() {
        let body = format!("{}02-Jan-03,10.0,11.0,9.5,10.5,-\n", HEADER);
        let records = parse(&body).unwrap();
        assert_eq!(records[0].volume, MISSING_VALUE);
        assert!((records[0].close - 10.5).abs() < 1e-9);
    }

    #[test]
    fn empty_and_garbage_fields_become_sentinel() {
        let body = format!("{}02-Jan-03,,abc,9.5,-,100\n", HEADER);
        let record = parse(&body).unwrap()[0];
        assert_eq!(record.open, MISSING_VALUE);
        assert_eq!(record.high, MISSING_VALUE);
        assert_eq!(record.close, MISSING_VALUE);
        assert!((record.low - 9.5).abs() < 1e-9);
    }

    #[test]
    fn header_only_body_yields_no_records() {
        assert!(parse(HEADER).unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn short_row_is_a_parse_error_with_its_line() {
        let body = format!("{}02-Jan-03,10.0,11.0,9.5,10.5,100\n03-Jan-03,10.0,11.0\n", HEADER);
        match parse(&body) {
            Err(HistoryError::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("expected 6 fields"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn quoted_comma_splits_into_an_extra_field() {
        let body = format!("{}02-Jan-03,\"1,000\",1,1,1,1\n01-Jan-03,1,1,1,1,1\n", HEADER);
        match parse(&body) {
            Err(HistoryError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("found 7"), "{message}");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unreadable_date_is_a_parse_error() {
        let body = format!("{}2003-01-02,10.0,11.0,9.5,10.5,100\n", HEADER);
        assert!(matches!(parse(&body), Err(HistoryError::Parse { line: 2, .. })));
    }
}
