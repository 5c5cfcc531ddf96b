use crate::core::session::Session;
use crate::errors::AppResult;

/// Write one excluded-date slot on a row. Filling the open trailing slot
/// opens a new one.
pub fn handle(session: &mut Session, pos: usize, slot: usize, value: &str) -> AppResult<()> {
    session.store.update_excluded_date(pos, slot, value)
}
