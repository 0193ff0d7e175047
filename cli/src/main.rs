//! Love Vault CLI
//!
//! # Commands
//! - `love-vault play` - Open the vault and solve it interactively
//! - `love-vault stages [--json]` - List the puzzle stages (answers withheld)
//! - `love-vault achievements` - Show the badge catalog and what the player has earned

mod achievements;
mod play;
mod render;
mod stages;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vault_runtime::VaultConfig;
use vault_runtime::telemetry::init_stderr_tracing;

/// Love Vault - crack the five-stage secret vault
#[derive(Parser)]
#[command(name = "love-vault")]
#[command(author, version, about = "Crack the five-stage secret vault")]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

/// Settings that override the config file and environment.
#[derive(Args)]
struct Overrides {
    /// Config file (default: ./love-vault.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Player whose achievements are recorded
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Directory for the achievement ledger (in-memory when omitted)
    #[arg(short, long, global = true)]
    ledger: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the vault
    Play {
        /// Pause after each solved stage, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// List the puzzle stages
    Stages {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the achievement catalog
    Achievements,
}

impl Overrides {
    fn resolve(self) -> Result<VaultConfig> {
        let mut config = VaultConfig::load(self.config.as_deref())?;
        if let Some(player) = self.player {
            config.player = player;
        }
        if let Some(dir) = self.ledger {
            config.ledger_dir = Some(dir);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = cli.overrides.resolve()?;
    init_stderr_tracing(&config.log_filter);
    config.report_rejected();
    tracing::debug!(?config, "Configuration resolved");

    match cli.command {
        Commands::Play { delay_ms } => {
            if let Some(ms) = delay_ms {
                config.advance_delay_ms = ms;
            }
            play::run_play_command(&config).await
        }
        Commands::Stages { json } => stages::run_stages_command(json),
        Commands::Achievements => achievements::run_achievements_command(&config).await,
    }
}
