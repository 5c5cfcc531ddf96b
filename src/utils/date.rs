use chrono::{Local, NaiveDate};

/// Parse a raw entry string as a calendar date. Anything that is not
/// `YYYY-MM-DD` counts as unset.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Long month name plus 4-digit year, e.g. "January 2024".
pub fn month_year_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

/// Wall-clock stamp written onto a row when it is saved.
pub fn now_stamp(format: &str) -> String {
    Local::now().format(format).to_string()
}
