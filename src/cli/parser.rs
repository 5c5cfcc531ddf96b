use clap::Parser;

/// Command-line interface definition for drrcalc
/// Interactive session to track lead intake and the expected daily run rate
#[derive(Parser)]
#[command(
    name = "drrcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive DRR tracker: enter period rows and lead counts, get the expected daily run rate",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Run with built-in defaults only (no user config read)
    #[arg(long = "test", hide = true)]
    pub test: bool,
}
