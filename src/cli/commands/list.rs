use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::utils::formatting::{excluded_cell, strip_month_label};
use crate::utils::table::Table;

/// Render the editable rows.
pub fn handle(session: &Session, cfg: &Config) -> AppResult<()> {
    let mut table = Table::new(&[
        "Pos",
        "Index",
        "Start Date",
        "End Date",
        "Month",
        "Excluded",
        "Days",
        "Leads",
        "DRR",
        "Last Update",
    ]);

    for (pos, row) in session.store.rows().iter().enumerate() {
        table.add_row(vec![
            (pos + 1).to_string(),
            row.index.to_string(),
            row.start_date.clone(),
            row.end_date.clone(),
            strip_month_label(&row.month_year).to_string(),
            excluded_cell(&row.excluded_dates),
            row.number_of_days.to_string(),
            row.leads.to_string(),
            row.drr.clone(),
            row.last_update.clone(),
        ]);
    }

    println!("{}", table.render(&cfg.separator_char));
    Ok(())
}
