//! Interactive vault session

use crate::render;
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use vault_core::prelude::*;
use vault_runtime::{VaultConfig, VaultSession};

const HINT_COMMAND: &str = ":hint";
const QUIT_COMMANDS: [&str; 2] = [":quit", ":q"];

/// Run the vault until it is unlocked, the player quits, or stdin closes.
pub async fn run_play_command(config: &VaultConfig) -> Result<()> {
    let ledger = config
        .open_ledger()
        .await
        .context("Failed to open achievement ledger")?;
    let mut session = VaultSession::love_vault(ledger);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render::banner("LOVE_VAULT_v1.0"));
    println!("Type {} for a hint, {} to leave.", HINT_COMMAND, QUIT_COMMANDS[0]);
    let mut printed = render::flush(session.vault().transcript(), 0);
    let mut shown_stage = None;

    while let Some(stage) = session.vault().current_stage().cloned() {
        if shown_stage != Some(stage.index) {
            println!("\n{}", render::progress(session.vault()));
            println!("{}", render::stage_header(&stage));
            shown_stage = Some(stage.index);
        }
        print!("{} ", stage.kind.placeholder());
        std::io::stdout().flush().context("Failed to write prompt")?;

        let Some(input) = lines.next_line().await.context("Failed to read answer")? else {
            tracing::info!("Input closed before the vault was unlocked");
            break;
        };

        let command = input.trim();
        if QUIT_COMMANDS.contains(&command) {
            break;
        }
        if command == HINT_COMMAND {
            let shown = session.reveal_hint().map(str::to_string);
            match shown {
                Some(hint) if session.vault().hint_visible() => println!("{}", render::hint(&hint)),
                _ => println!("(hint hidden)"),
            }
            continue;
        }

        let echo = if stage.kind.is_masked() {
            "*".repeat(command.chars().count())
        } else {
            command.to_string()
        };
        println!("{}", render::line(&TranscriptLine::input(&echo)));

        let outcome = session.submit_answer(&input);
        match outcome {
            Outcome::Fault(_) => {
                printed = render::flush(session.vault().transcript(), printed);
                if let Some(message) = session.vault().feedback() {
                    println!("{}", render::feedback(message));
                }
            }
            Outcome::Next(VaultPhase::Locked(_)) => {
                // Stage line now, loading line after the pause.
                let fresh = session.vault().transcript().since(printed).to_vec();
                let (passed, loading) = render::split_advance(&fresh);
                render::print_lines(passed);
                tokio::time::sleep(config.advance_delay()).await;
                render::print_lines(loading);
                printed = session.vault().transcript().len();
            }
            Outcome::Next(VaultPhase::Unlocked) | Outcome::Emit(..) => {
                render::flush(session.vault().transcript(), printed);
            }
        }
    }

    if let Some(message) = session.vault().secret_message() {
        println!("\n{}", render::banner("Vault Unlocked! You cracked all the codes! 🎉"));
        println!("{}", render::secret(message));
    }

    session.settle().await;
    Ok(())
}
