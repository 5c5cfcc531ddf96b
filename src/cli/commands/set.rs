use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::field::Field;

/// Set one scalar field on a row. Derived fields recompute immediately;
/// like a form edit, a successful set prints nothing.
pub fn handle(session: &mut Session, pos: usize, field: Field, value: &str) -> AppResult<()> {
    session.store.update_field(pos, field, value)
}
