use super::model::SnapshotExport;
use crate::errors::{AppError, AppResult};
use crate::models::snapshot::Snapshot;

/// Write the snapshot list as a pretty-printed JSON array.
pub fn write_json(path: &str, snapshots: &[Snapshot]) -> AppResult<()> {
    let records: Vec<SnapshotExport> = snapshots.iter().map(SnapshotExport::from).collect();

    let json = serde_json::to_string_pretty(&records).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
