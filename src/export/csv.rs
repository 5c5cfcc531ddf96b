use super::model::{SnapshotExport, headers};
use crate::errors::AppResult;
use crate::models::snapshot::Snapshot;
use csv::Writer;

/// Write the snapshot list as CSV with a header record.
pub fn write_csv(path: &str, snapshots: &[Snapshot]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(headers())?;

    for snap in snapshots {
        let rec = SnapshotExport::from(snap);
        wtr.write_record(&[
            rec.index.to_string(),
            rec.start_date,
            rec.end_date,
            rec.excluded_dates,
            rec.leads.to_string(),
            rec.drr,
            rec.month,
            rec.number_of_days.to_string(),
            rec.saved_at,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
