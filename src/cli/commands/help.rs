use crate::errors::AppResult;

/// Print the command reference.
pub fn handle() -> AppResult<()> {
    println!("Commands:");
    println!("  set <row> <start|end|leads> [value]   set a field (no value clears it)");
    println!("  exclude <row> <slot> [date]           set an excluded date (no value clears it)");
    println!("  save <row>                            snapshot the row and open the next period");
    println!("  cancel <row>                          remove the row");
    println!("  list                                  show the editable rows");
    println!("  saved                                 show saved snapshots");
    println!("  export <csv|json> <file>              write the snapshots to a file");
    println!("  help                                  this text");
    println!("  quit                                  end the session (state is discarded)");
    println!();
    println!("Rows and slots are one-based positions as shown by `list`.");
    println!("Dates use the YYYY-MM-DD format. Each row keeps one open");
    println!("excluded-date slot at the end.");
    Ok(())
}
