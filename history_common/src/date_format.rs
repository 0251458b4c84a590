//! Date codecs used on the wire.
//!
//! Requests carry ISO dates (`2003-01-01`); response rows carry the short
//! `DD-Mon-YY` form (`01-Jan-03`). Two-digit years resolve into the window
//! chrono uses for `%y`: `70`..`99` are 1970..1999 and `00`..`69` are
//! 2000..2069. Python's `strptime` puts `69` in 1969 instead, so the two
//! disagree on that one year. The short form round-trips for dates between
//! 1970 and 2068.
use chrono::NaiveDate;

/// `strftime` pattern of the date column in response rows.
pub const SHORT_DATE_FORMAT: &str = "%d-%b-%y";
/// `strftime` pattern of the dates sent in the query string.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `DD-Mon-YY` date such as `01-Jan-03`.
///
/// Surrounding whitespace is ignored and the month name is matched
/// case-insensitively.
pub fn parse_short_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), SHORT_DATE_FORMAT)
}

/// Format a date as `DD-Mon-YY`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

/// Format a date as `YYYY-MM-DD` for the query string.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_zero_padded_short_date() {
        assert_eq!(parse_short_date("01-Jan-03").unwrap(), ymd(2003, 1, 1));
        assert_eq!(parse_short_date("31-Dec-07").unwrap(), ymd(2007, 12, 31));
    }

    #[test]
    fn parses_unpadded_day_and_padding_whitespace() {
        assert_eq!(parse_short_date(" 2-Jan-08 ").unwrap(), ymd(2008, 1, 2));
    }

    #[test]
    fn two_digit_years_in_the_nineties_stay_in_the_last_century() {
        assert_eq!(parse_short_date("15-Mar-99").unwrap(), ymd(1999, 3, 15));
    }

    #[test]
    fn sixty_nine_resolves_to_the_next_century() {
        assert_eq!(parse_short_date("01-Jan-69").unwrap(), ymd(2069, 1, 1));
        assert_eq!(parse_short_date("01-Jan-70").unwrap(), ymd(1970, 1, 1));
    }

    #[test]
    fn rejects_iso_and_garbage() {
        assert!(parse_short_date("2003-01-01").is_err());
        assert!(parse_short_date("32-Jan-03").is_err());
        assert!(parse_short_date("").is_err());
    }

    #[test]
    fn formats_both_shapes() {
        let date = ymd(2003, 1, 1);
        assert_eq!(format_short_date(date), "01-Jan-03");
        assert_eq!(format_iso_date(date), "2003-01-01");
    }
}
