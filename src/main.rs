//! homeworkbot - Telegram notifier for homework review status changes
//!
//! CLI entry point: credential check, then the poll loop (or one cycle).

use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{error, info};

use homeworkbot::Credentials;
use homeworkbot::cli::Cli;
use homeworkbot::practicum::PracticumClient;
use homeworkbot::telegram::TelegramNotifier;
use homeworkbot::watcher::{StatusWatcher, WatcherConfig};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    // Log level priority: CLI --log-level > RUST_LOG > default (INFO)
    let level = if let Some(s) = cli_log_level {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    // EARLY VALIDATION - fail fast, never enter the loop half-configured
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Startup aborted: credentials missing");
            return Err(e);
        }
    };

    let client = Arc::new(PracticumClient::new(credentials.practicum_token));
    let notifier = Arc::new(TelegramNotifier::new(credentials.telegram_token, credentials.chat_id));
    let mut watcher = StatusWatcher::new(WatcherConfig::default(), client, notifier);

    if cli.once {
        let outcome = watcher.run_cycle().await;
        info!(outcome = ?outcome, "Single poll cycle complete");
        return Ok(());
    }

    info!("homeworkbot starting");

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = watcher.run() => result?,
            _ = sigint.recv() => info!("SIGINT received - shutting down"),
            _ = sigterm.recv() => info!("SIGTERM received - shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            result = watcher.run() => result?,
            _ = tokio::signal::ctrl_c() => info!("Ctrl+C received - shutting down"),
        }
    }

    Ok(())
}
