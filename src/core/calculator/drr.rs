use crate::models::row::Row;
use crate::utils::date;

/// Derived fields recomputed from a row's inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub drr: String,
    pub month_year: String,
    pub number_of_days: i64,
}

/// Recompute the derived fields for one row.
///
/// Returns None when either date is unset/unparsable or the range is
/// reversed; the caller keeps the previous values in that case.
/// Excluded days are subtracted without a floor and the division is not
/// guarded: a period fully eaten by exclusions goes negative, a zero-length
/// one divides by zero. Both degenerate silently.
pub fn derive(row: &Row) -> Option<Derived> {
    let start = date::parse_date(&row.start_date)?;
    let end = date::parse_date(&row.end_date)?;
    if start > end {
        return None;
    }

    let raw_days = (end - start).num_days();
    let effective = raw_days - row.excluded_count() as i64;

    let drr = row.leads / effective as f64;

    Some(Derived {
        drr: format!("{:.2}", drr),
        month_year: format!("Month: {}", date::month_year_label(start)),
        number_of_days: effective,
    })
}

/// Write the derived fields back onto the row, if the inputs allow it.
pub fn apply(row: &mut Row) {
    if let Some(d) = derive(row) {
        row.drr = d.drr;
        row.month_year = d.month_year;
        row.number_of_days = d.number_of_days;
    }
}
