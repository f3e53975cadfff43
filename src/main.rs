// folio - a terminal portfolio with a contact relay
//
// The TUI renders the portfolio page; the relay accepts contact form
// submissions (from the TUI or any HTTP client) and forwards them to the
// configured mail provider.

mod cli;
mod clipboard;
mod config;
mod content;
mod effects;
mod gallery;
mod logging;
mod page;
mod relay;
mod startup;
mod tui;
mod typing;
mod util;

use anyhow::{Context, Result};
use config::Config;
use content::Portfolio;
use logging::{LogBuffer, TuiLogLayer};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Subcommands (config, content) run and exit
    let headless = match cli::handle_cli() {
        cli::CliAction::Exit => return Ok(()),
        cli::CliAction::Run { headless } => headless,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    config.enable_tui = config.enable_tui && !headless;

    let log_buffer = LogBuffer::new();

    // In TUI mode logs go to the buffer (prevents garbling the display),
    // otherwise to stdout. File logging is JSON, in addition to either.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter_directive().into());

    // The guard must outlive the program for logs to flush
    let (file_layer, _file_guard) = match config.logging.file_writer() {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            config
                .enable_tui
                .then(|| TuiLogLayer::new(log_buffer.clone())),
        )
        .with((!config.enable_tui).then(tracing_subscriber::fmt::layer))
        .with(file_layer)
        .init();

    let portfolio = Portfolio::load(config.content_path.as_deref())
        .context("Failed to load portfolio content")?;
    let portfolio = Arc::new(portfolio);

    startup::print_startup(&config, &portfolio);
    startup::log_startup(&config);

    // Graceful relay shutdown; a oneshot can only fire once
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let relay_config = config.clone();
    let relay_content = Arc::clone(&portfolio);
    let relay_handle = tokio::spawn(async move {
        if let Err(e) = relay::start_relay(relay_config, relay_content, shutdown_rx).await {
            tracing::error!("Contact relay stopped: {:#}", e);
        }
    });

    if config.enable_tui {
        let result = tui::run_tui(config, portfolio, log_buffer).await;
        if let Err(e) = &result {
            tracing::error!("TUI error: {:#}", e);
        }
        let _ = shutdown_tx.send(());
        let _ = relay_handle.await;
        result
    } else {
        tracing::info!("Running in headless mode. Press Ctrl+C to stop.");
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl+C")?;
        tracing::info!("Shutting down...");
        let _ = shutdown_tx.send(());
        let _ = relay_handle.await;
        Ok(())
    }
}
