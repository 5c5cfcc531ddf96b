use crate::models::snapshot::Snapshot;
use crate::utils::formatting::{excluded_compact, strip_month_label};
use serde::Serialize;

/// Flat record for snapshot exports.
#[derive(Serialize, Clone, Debug)]
pub struct SnapshotExport {
    pub index: u32,
    pub start_date: String,
    pub end_date: String,
    pub excluded_dates: String,
    pub leads: f64,
    pub drr: String,
    pub month: String,
    pub number_of_days: i64,
    pub saved_at: String,
}

impl From<&Snapshot> for SnapshotExport {
    fn from(s: &Snapshot) -> Self {
        let row = &s.row;
        Self {
            index: row.index,
            start_date: row.start_date.clone(),
            end_date: row.end_date.clone(),
            excluded_dates: excluded_compact(&row.excluded_dates),
            leads: row.leads,
            drr: row.drr.clone(),
            month: strip_month_label(&row.month_year).to_string(),
            number_of_days: row.number_of_days,
            saved_at: row.last_update.clone(),
        }
    }
}

/// Header for CSV
pub(crate) fn headers() -> Vec<&'static str> {
    vec![
        "index",
        "start_date",
        "end_date",
        "excluded_dates",
        "leads",
        "drr",
        "month",
        "number_of_days",
        "saved_at",
    ]
}
