use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, eyre};

use crate::api::BackendClient;
use crate::api::types::MapRequest;
use crate::config::AppConfig;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "crisistui", about = "TUI and CLI for disaster tweet classification")]
pub struct Cli {
    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand)]
pub enum CliCommand {
    /// Launch the interactive TUI (default)
    Tui,
    /// Fetch classified tweets (JSONL)
    Classify,
    /// Generate the disaster map and write its markup to a file
    Map {
        /// Output path for the markup (defaults to a temp file)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Open the written file in the system browser
        #[arg(long = "open")]
        open_browser: bool,
    },
}

// ---------------------------------------------------------------------------
// Client construction (shared with main.rs TUI path)
// ---------------------------------------------------------------------------

/// Build a `BackendClient` from config, validating the base URL.
pub fn build_backend_client(config: &AppConfig) -> eyre::Result<BackendClient> {
    url::Url::parse(&config.backend_url)
        .map_err(|e| eyre!("invalid backend URL {:?}: {e}", config.backend_url))?;
    Ok(BackendClient::new(&config.backend_url))
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

pub async fn run_command(cmd: CliCommand, config: AppConfig) -> eyre::Result<()> {
    let client = build_backend_client(&config)?;

    match cmd {
        CliCommand::Tui => {
            unreachable!("tui is handled in main")
        }

        CliCommand::Classify => {
            let tweets = client.classify().await.map_err(|e| eyre!("{e}"))?;
            for tweet in &tweets {
                let line = serde_json::to_string(tweet)?;
                println!("{line}");
            }
        }

        CliCommand::Map { out, open_browser } => {
            // Fetch the current classifications first so the map reflects
            // real data; an empty result falls back to the sample payload.
            let tweets = client.classify().await.unwrap_or_default();
            let request = MapRequest::from_classified(&tweets);

            let markup = client
                .generate_map(&request)
                .await
                .map_err(|e| eyre!("{e}"))?;

            let path = out.unwrap_or_else(|| std::env::temp_dir().join("crisistui-map.html"));
            std::fs::write(&path, markup)?;
            println!("{}", path.display());

            if open_browser {
                open::that_detached(&path)?;
            }
        }
    }

    Ok(())
}
