pub mod api;
pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod event;
pub mod map;
pub mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, CliCommand};
use config::load_config;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Initialize tracing (logs to stderr if RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config().with_backend_override(cli.backend.clone());

    match cli.command {
        // No subcommand or explicit `tui` → launch the interactive TUI.
        None | Some(CliCommand::Tui) => run_tui(config).await,
        // All other subcommands → non-interactive output.
        Some(cmd) => cli::run_command(cmd, config).await,
    }
}

/// Launch the interactive TUI.
async fn run_tui(config: config::AppConfig) -> color_eyre::Result<()> {
    let client = cli::build_backend_client(&config)?;
    tracing::info!(backend = %config.backend_url, "backend client initialized");

    let terminal = ratatui::init();
    let result = App::new(config, client).run(terminal).await;
    ratatui::restore();
    result
}
