//! Line-oriented session loop. Each input line is one discrete event,
//! handled synchronously before the next one is read.

use crate::cli::commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::field::Field;
use crate::ui::messages;
use std::io::{self, BufRead, IsTerminal, Write};

const SET_USAGE: &str = "set <row> <start|end|leads> [value]";
const EXCLUDE_USAGE: &str = "exclude <row> <slot> [date]";
const SAVE_USAGE: &str = "save <row>";
const CANCEL_USAGE: &str = "cancel <row>";
const EXPORT_USAGE: &str = "export <csv|json> <file>";

/// One parsed input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set {
        pos: usize,
        field: Field,
        value: String,
    },
    Exclude {
        pos: usize,
        slot: usize,
        value: String,
    },
    Save {
        pos: usize,
    },
    Cancel {
        pos: usize,
    },
    List,
    Saved,
    Export {
        format: ExportFormat,
        file: String,
    },
    Help,
    Quit,
}

/// Parse a one-based position argument into a zero-based index.
fn parse_pos(tok: Option<&str>, usage: &'static str) -> AppResult<usize> {
    let n: usize = tok
        .and_then(|t| t.parse().ok())
        .ok_or(AppError::Usage(usage))?;
    if n == 0 {
        return Err(AppError::Usage(usage));
    }
    Ok(n - 1)
}

/// Parse one input line. Blank lines are no events at all.
pub fn parse_line(line: &str) -> AppResult<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&cmd) = tokens.first() else {
        return Ok(None);
    };

    let command = match cmd.to_lowercase().as_str() {
        "set" => {
            let pos = parse_pos(tokens.get(1).copied(), SET_USAGE)?;
            let field = tokens
                .get(2)
                .and_then(|t| Field::from_code(t))
                .ok_or_else(|| match tokens.get(2) {
                    Some(t) => AppError::UnknownField((*t).to_string()),
                    None => AppError::Usage(SET_USAGE),
                })?;
            let value = tokens.get(3).unwrap_or(&"").to_string();
            Command::Set { pos, field, value }
        }
        "exclude" => {
            let pos = parse_pos(tokens.get(1).copied(), EXCLUDE_USAGE)?;
            let slot = parse_pos(tokens.get(2).copied(), EXCLUDE_USAGE)?;
            let value = tokens.get(3).unwrap_or(&"").to_string();
            Command::Exclude { pos, slot, value }
        }
        "save" => Command::Save {
            pos: parse_pos(tokens.get(1).copied(), SAVE_USAGE)?,
        },
        "cancel" => Command::Cancel {
            pos: parse_pos(tokens.get(1).copied(), CANCEL_USAGE)?,
        },
        "list" => Command::List,
        "saved" => Command::Saved,
        "export" => {
            let format = tokens
                .get(1)
                .and_then(|t| ExportFormat::from_code(t))
                .ok_or_else(|| match tokens.get(1) {
                    Some(t) => AppError::InvalidExportFormat((*t).to_string()),
                    None => AppError::Usage(EXPORT_USAGE),
                })?;
            let file = tokens
                .get(2)
                .ok_or(AppError::Usage(EXPORT_USAGE))?
                .to_string();
            Command::Export { format, file }
        }
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// Central command dispatcher
pub fn dispatch(command: &Command, session: &mut Session, cfg: &Config) -> AppResult<()> {
    match command {
        Command::Set { pos, field, value } => commands::set::handle(session, *pos, *field, value),
        Command::Exclude { pos, slot, value } => {
            commands::exclude::handle(session, *pos, *slot, value)
        }
        Command::Save { pos } => commands::save::handle(session, *pos, cfg),
        Command::Cancel { pos } => commands::cancel::handle(session, *pos),
        Command::List => commands::list::handle(session, cfg),
        Command::Saved => commands::saved::handle(session, cfg),
        Command::Export { format, file } => commands::export::handle(session, format, file),
        Command::Help => commands::help::handle(),
        Command::Quit => Ok(()), // the loop breaks before dispatching this
    }
}

/// Run the interactive loop until `quit` or end of input. Per-event
/// failures are rendered and the loop keeps going; nothing here ends the
/// process.
pub fn run_loop(session: &mut Session, cfg: &Config) -> AppResult<()> {
    let interactive = io::stdin().is_terminal();

    if interactive {
        messages::info("drrcalc session - type 'help' for commands.");
        prompt()?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;

        match parse_line(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = dispatch(&command, session, cfg) {
                    render_failure(e);
                }
            }
            Ok(None) => {}
            Err(e) => render_failure(e),
        }

        if interactive {
            prompt()?;
        }
    }

    Ok(())
}

/// The single-row guard surfaces as a warning, everything else as an
/// error line.
fn render_failure(e: AppError) {
    if matches!(e, AppError::LastRow) {
        messages::warning(e);
    } else {
        messages::error(e);
    }
}

fn prompt() -> AppResult<()> {
    print!("drr> ");
    io::stdout().flush()?;
    Ok(())
}
