use crate::core::snapshots::SnapshotList;
use crate::core::store::RowStore;
use crate::errors::AppResult;
use crate::models::row::Row;
use crate::models::snapshot::Snapshot;
use crate::utils::date;

/// One in-memory editing session: the editable rows plus everything saved
/// so far. Dropped on exit; nothing persists.
#[derive(Debug, Default)]
pub struct Session {
    pub store: RowStore,
    pub saved: SnapshotList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize the row at `pos`: stamp it with the current wall-clock
    /// time, append a value copy to the snapshot list, and seed the next
    /// period as a fresh row inserted directly above the saved one.
    ///
    /// There is no row-state validation: an incomplete row is stamped and
    /// stored as-is.
    pub fn save(&mut self, pos: usize, stamp_format: &str) -> AppResult<Snapshot> {
        let stamp = date::now_stamp(stamp_format);

        let row = self.store.stamp_row(pos, &stamp)?;
        let snapshot = Snapshot::of(row);
        let next = Row::continuation_of(row);

        self.saved.push(snapshot.clone());
        self.store.insert_row_above(pos, next)?;

        Ok(snapshot)
    }
}
