//! Formatting utilities shared by the table views and the export model.

/// The month label is stored with its leading `Month:` token; display
/// layers show only the remainder.
pub fn strip_month_label(s: &str) -> &str {
    s.strip_prefix("Month:").unwrap_or(s).trim_start()
}

/// Excluded-dates cell for the editable table: entries in order, the open
/// trailing slot shown as `_`.
pub fn excluded_cell(dates: &[String]) -> String {
    dates
        .iter()
        .map(|d| if d.is_empty() { "_" } else { d.as_str() })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compact excluded-dates form for snapshots and exports: placeholders
/// dropped, `;`-separated.
pub fn excluded_compact(dates: &[String]) -> String {
    dates
        .iter()
        .filter(|d| !d.is_empty())
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(";")
}
