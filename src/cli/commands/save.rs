use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Finalize a row: stamp it, snapshot it, seed the continuation row.
pub fn handle(session: &mut Session, pos: usize, cfg: &Config) -> AppResult<()> {
    let snapshot = session.save(pos, &cfg.datetime_format)?;

    success(format!(
        "Row {} saved (DRR {}) at {}",
        snapshot.row.index, snapshot.row.drr, snapshot.row.last_update
    ));
    Ok(())
}
