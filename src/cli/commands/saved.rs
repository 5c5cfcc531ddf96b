use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{excluded_compact, strip_month_label};
use crate::utils::table::Table;

/// Render the snapshot list in save order.
pub fn handle(session: &Session, cfg: &Config) -> AppResult<()> {
    if session.saved.is_empty() {
        info("No saved rows yet.");
        return Ok(());
    }

    let mut table = Table::new(&[
        "#",
        "Index",
        "Start Date",
        "End Date",
        "Month",
        "Excluded",
        "Days",
        "Leads",
        "DRR",
        "Saved At",
    ]);

    for (n, snap) in session.saved.entries().iter().enumerate() {
        let row = &snap.row;
        table.add_row(vec![
            (n + 1).to_string(),
            row.index.to_string(),
            row.start_date.clone(),
            row.end_date.clone(),
            strip_month_label(&row.month_year).to_string(),
            excluded_compact(&row.excluded_dates),
            row.number_of_days.to_string(),
            row.leads.to_string(),
            row.drr.clone(),
            row.last_update.clone(),
        ]);
    }

    println!("{}", table.render(&cfg.separator_char));
    Ok(())
}
