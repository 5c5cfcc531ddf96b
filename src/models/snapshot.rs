use super::row::Row;
use serde::Serialize;

/// Value copy of a row taken at the moment of saving, with `last_update`
/// populated. Never mutated afterwards; later edits to the originating row
/// do not reach it.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub row: Row,
}

impl Snapshot {
    pub fn of(row: &Row) -> Self {
        Self { row: row.clone() }
    }
}
