//! CLI definitions

use clap::Parser;

/// homeworkbot - Telegram notifier for homework review status changes
#[derive(Debug, Parser)]
#[command(
    name = "hwb",
    about = "Polls the Practicum homework API and messages a Telegram chat on status changes",
    version
)]
pub struct Cli {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Run a single poll cycle and exit instead of looping
    #[arg(long)]
    pub once: bool,
}
