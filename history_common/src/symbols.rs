//! Symbol table of the clustering universe and helpers to read symbol lists.
//!
//! `Symbol` enumerates the exchange-qualified tickers the client fetches by
//! default, each with a display name. Symbols parse case-insensitively from
//! their qualified form (`NYSE:XOM`) and are accepted on the command line by
//! their bare ticker (`xom`). The fetcher itself never sees this type; it
//! receives the qualified form as an opaque string.
use std::io::BufRead;

use clap::ValueEnum;
use strum::EnumMessage as _;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

use crate::error::HistoryError;

/// Trait providing file parsing for symbols.
pub trait SymbolParser {
    /// Parses symbols from a buffered reader.
    ///
    /// Each non-empty line is parsed as a single `Symbol` value using `FromStr`;
    /// lines starting with `#` are comments.
    /// Returns an error if any line cannot be parsed.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Symbol>, HistoryError>;
}

impl SymbolParser for Symbol {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, HistoryError> {
        let mut symbols = Vec::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(HistoryError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            match trimmed_line.parse::<Self>() {
                Ok(symbol) => symbols.push(symbol),
                Err(e) => {
                    return Err(HistoryError::ParseSymbolsFile(format!(
                        "line {}: {:?}: {}",
                        idx + 1,
                        trimmed_line,
                        e
                    )));
                }
            }
        }
        Ok(symbols)
    }
}

/// Exchange-qualified tickers with their display names.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    EnumMessage,
    Hash,
    Eq,
    PartialEq,
)]
#[value(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    #[strum(to_string = "NYSE:TOT", message = "Total")]
    TOT,
    #[strum(to_string = "NYSE:XOM", message = "Exxon")]
    XOM,
    #[strum(to_string = "NYSE:CVX", message = "Chevron")]
    CVX,
    #[strum(to_string = "NYSE:COP", message = "ConocoPhillips")]
    COP,
    #[strum(to_string = "NYSE:VLO", message = "Valero Energy")]
    VLO,
    #[strum(to_string = "NASDAQ:MSFT", message = "Microsoft")]
    MSFT,
    #[strum(to_string = "NYSE:IBM", message = "IBM")]
    IBM,
    #[strum(to_string = "NYSE:TWX", message = "Time Warner")]
    TWX,
    #[strum(to_string = "NASDAQ:CMCSA", message = "Comcast")]
    CMCSA,
    #[strum(to_string = "NYSE:CVC", message = "Cablevision")]
    CVC,
    #[strum(to_string = "NASDAQ:YHOO", message = "Yahoo")]
    YHOO,
    #[strum(to_string = "NASDAQ:DELL", message = "Dell")]
    DELL,
    #[strum(to_string = "NYSE:HPQ", message = "HP")]
    HPQ,
    #[strum(to_string = "NASDAQ:AMZN", message = "Amazon")]
    AMZN,
    #[strum(to_string = "NYSE:TM", message = "Toyota")]
    TM,
    #[strum(to_string = "NYSE:CAJ", message = "Canon")]
    CAJ,
    #[strum(to_string = "NYSE:SNE", message = "Sony")]
    SNE,
    #[strum(to_string = "NYSE:F", message = "Ford")]
    F,
    #[strum(to_string = "NYSE:HMC", message = "Honda")]
    HMC,
    #[strum(to_string = "NYSE:NAV", message = "Navistar")]
    NAV,
    #[strum(to_string = "NYSE:NOC", message = "Northrop Grumman")]
    NOC,
    #[strum(to_string = "NYSE:BA", message = "Boeing")]
    BA,
    #[strum(to_string = "NYSE:KO", message = "Coca Cola")]
    KO,
    #[strum(to_string = "NYSE:MMM", message = "3M")]
    MMM,
    #[strum(to_string = "NYSE:MCD", message = "McDonald's")]
    MCD,
    #[strum(to_string = "NYSE:PEP", message = "Pepsi")]
    PEP,
    #[strum(to_string = "NYSE:K", message = "Kellogg")]
    K,
    #[strum(to_string = "NYSE:UN", message = "Unilever")]
    UN,
    #[strum(to_string = "NASDAQ:MAR", message = "Marriott")]
    MAR,
    #[strum(to_string = "NYSE:PG", message = "Procter Gamble")]
    PG,
    #[strum(to_string = "NYSE:CL", message = "Colgate-Palmolive")]
    CL,
    #[strum(to_string = "NYSE:GE", message = "General Electrics")]
    GE,
    #[strum(to_string = "NYSE:WFC", message = "Wells Fargo")]
    WFC,
    #[strum(to_string = "NYSE:JPM", message = "JPMorgan Chase")]
    JPM,
    #[strum(to_string = "NYSE:AIG", message = "AIG")]
    AIG,
    #[strum(to_string = "NYSE:AXP", message = "American express")]
    AXP,
    #[strum(to_string = "NYSE:BAC", message = "Bank of America")]
    BAC,
    #[strum(to_string = "NYSE:GS", message = "Goldman Sachs")]
    GS,
    #[strum(to_string = "NASDAQ:AAPL", message = "Apple")]
    AAPL,
    #[strum(to_string = "NYSE:SAP", message = "SAP")]
    SAP,
    #[strum(to_string = "NASDAQ:CSCO", message = "Cisco")]
    CSCO,
    #[strum(to_string = "NASDAQ:TXN", message = "Texas Instruments")]
    TXN,
    #[strum(to_string = "NYSE:XRX", message = "Xerox")]
    XRX,
    #[strum(to_string = "NYSE:WMT", message = "Wal-Mart")]
    WMT,
    #[strum(to_string = "NYSE:HD", message = "Home Depot")]
    HD,
    #[strum(to_string = "NYSE:GSK", message = "GlaxoSmithKline")]
    GSK,
    #[strum(to_string = "NYSE:PFE", message = "Pfizer")]
    PFE,
    #[strum(to_string = "NYSE:SNY", message = "Sanofi-Aventis")]
    SNY,
    #[strum(to_string = "NYSE:NVS", message = "Novartis")]
    NVS,
    #[strum(to_string = "NYSE:KMB", message = "Kimberly-Clark")]
    KMB,
    #[strum(to_string = "NYSE:R", message = "Ryder")]
    R,
    #[strum(to_string = "NYSE:GD", message = "General Dynamics")]
    GD,
    #[strum(to_string = "NYSE:RTN", message = "Raytheon")]
    RTN,
    #[strum(to_string = "NYSE:CVS", message = "CVS")]
    CVS,
    #[strum(to_string = "NYSE:CAT", message = "Caterpillar")]
    CAT,
    #[strum(to_string = "NYSE:DD", message = "DuPont de Nemours")]
    DD,
}

impl Symbol {
    /// Human-readable company name.
    pub fn display_name(&self) -> &'static str {
        self.get_message().unwrap_or_default()
    }

    /// Every symbol of the table, in fetch order.
    pub fn all() -> Vec<Symbol> {
        sorted_symbols(Symbol::iter())
    }
}

/// Deduplicate `symbols` and order them by qualified name, the order in which
/// a batch is fetched.
pub fn sorted_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Vec<Symbol> {
    let mut sorted: Vec<Symbol> = symbols.into_iter().collect();
    sorted.sort_by_key(|s| s.to_string());
    sorted.dedup();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn table_has_every_symbol_once() {
        let all = Symbol::all();
        assert_eq!(all.len(), 56);
        assert_eq!(Symbol::iter().count(), 56);
    }

    #[test]
    fn qualified_names_round_trip_through_from_str() {
        for symbol in Symbol::iter() {
            assert_eq!(symbol.to_string().parse::<Symbol>().unwrap(), symbol);
            assert!(!symbol.display_name().is_empty());
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("nyse:xom".parse::<Symbol>().unwrap(), Symbol::XOM);
        assert_eq!(Symbol::XOM.display_name(), "Exxon");
        assert_eq!(Symbol::MCD.display_name(), "McDonald's");
    }

    #[test]
    fn fetch_order_is_sorted_by_qualified_name() {
        let order = sorted_symbols([Symbol::XOM, Symbol::AAPL, Symbol::XOM, Symbol::AIG]);
        assert_eq!(order, vec![Symbol::AAPL, Symbol::AIG, Symbol::XOM]);

        let all: Vec<String> = Symbol::all().iter().map(|s| s.to_string()).collect();
        assert_eq!(all.first().map(String::as_str), Some("NASDAQ:AAPL"));
        assert_eq!(all.last().map(String::as_str), Some("NYSE:XRX"));
    }

    #[test]
    fn parses_symbols_file_skipping_blanks_and_comments() {
        let input = "# energy\nNYSE:XOM\n\n  NYSE:CVX  \nnasdaq:msft\n";
        let symbols = Symbol::parse_from_file(Cursor::new(input)).unwrap();
        assert_eq!(symbols, vec![Symbol::XOM, Symbol::CVX, Symbol::MSFT]);
    }

    #[test]
    fn unknown_symbol_in_file_is_reported_with_its_line() {
        let input = "NYSE:XOM\nNYSE:NOPE\n";
        match Symbol::parse_from_file(Cursor::new(input)) {
            Err(HistoryError::ParseSymbolsFile(msg)) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
