use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Remove a row. The store rejects removing the only one; that failure
/// surfaces as a warning in the session loop.
pub fn handle(session: &mut Session, pos: usize) -> AppResult<()> {
    session.store.remove_row(pos)?;

    info(format!("Row at position {} removed.", pos + 1));
    Ok(())
}
