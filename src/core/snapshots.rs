use crate::models::snapshot::Snapshot;

/// Append-only list of saved rows, in save order.
#[derive(Debug, Default)]
pub struct SnapshotList {
    entries: Vec<Snapshot>,
}

impl SnapshotList {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
