//! drrcalc library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use crate::core::session::Session;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once; --test runs on built-in defaults only
    let cfg = if cli.test {
        Config::default()
    } else {
        Config::load(cli.config.as_deref())
    };

    // 3. hand the session over to the interactive loop
    let mut session = Session::new();
    cli::repl::run_loop(&mut session, &cfg)
}
