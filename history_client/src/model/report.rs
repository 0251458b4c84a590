//! Batch report written after every symbol was fetched and validated.
//!
//! The report keeps each series as returned by the source and adds the
//! `close - open` variation matrix that downstream clustering consumes. The
//! matrix is left out when the series do not all have the same length.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use history_common::model::variation_matrix;
use history_common::{QuoteSeries, Result, Symbol};
use log::{info, warn};
use serde::Serialize;

/// History of one symbol together with its display name.
#[derive(Debug, Serialize)]
pub struct SymbolHistory {
    /// Company name from the symbol table.
    pub name: String,
    /// Validated history (`symbol` and `records` in the JSON output).
    #[serde(flatten)]
    pub series: QuoteSeries,
}

/// Result of a whole run.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Requested first day, shared by every symbol.
    pub start_date: NaiveDate,
    /// Requested last day, shared by every symbol.
    pub end_date: NaiveDate,
    /// Histories in fetch order.
    pub symbols: Vec<SymbolHistory>,
    /// One row of daily `close - open` per symbol, in fetch order.
    pub variations: Option<Vec<Vec<f64>>>,
}

impl BatchReport {
    /// Pair each fetched series with its symbol and assemble the variation matrix.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        symbols: &[Symbol],
        quotes: Vec<QuoteSeries>,
    ) -> Self {
        let variations = match variation_matrix(&quotes) {
            Ok(matrix) => Some(matrix),
            Err(e) => {
                warn!("Variation matrix skipped: {}", e);
                None
            }
        };

        let symbols = symbols
            .iter()
            .zip(quotes)
            .map(|(symbol, series)| SymbolHistory {
                name: String::from(symbol.display_name()),
                series,
            })
            .collect();

        BatchReport {
            start_date,
            end_date,
            symbols,
            variations,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Log one line per symbol.
    pub fn log_summary(&self) {
        for history in &self.symbols {
            let series = &history.series;
            match series.date_bounds() {
                Some((min, max)) => info!(
                    "{} ({}): {} records, {} .. {}",
                    series.symbol(),
                    history.name,
                    series.len(),
                    min,
                    max
                ),
                None => info!("{} ({}): no records", series.symbol(), history.name),
            }
        }
        if let Some(matrix) = &self.variations {
            info!(
                "Variation matrix: {} symbols x {} days",
                matrix.len(),
                matrix.first().map(Vec::len).unwrap_or(0)
            );
        }
    }
}
