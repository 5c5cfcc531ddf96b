use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use std::path::Path;

/// Export the snapshot list to a file. An empty list still writes a
/// valid (header-only / empty-array) document.
pub fn handle(session: &Session, format: &ExportFormat, file: &str) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export::csv::write_csv(file, session.saved.entries())?,
        ExportFormat::Json => export::json::write_json(file, session.saved.entries())?,
    }

    export::notify_export_success(format.as_str(), Path::new(file));
    Ok(())
}
