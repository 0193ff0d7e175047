//! Achievement catalog

use anyhow::{Context, Result};
use vault_core::Achievement;
use vault_runtime::VaultConfig;

pub async fn run_achievements_command(config: &VaultConfig) -> Result<()> {
    let ledger = config
        .open_ledger()
        .await
        .context("Failed to open achievement ledger")?;
    let recorded = ledger
        .recorded()
        .await
        .context("Failed to read achievement ledger")?;

    println!(
        "Achievements for {} ({}/{})\n",
        config.player,
        recorded.len(),
        Achievement::ALL.len()
    );
    for achievement in Achievement::ALL {
        let mark = if recorded.contains(&achievement) { "✅" } else { "  " };
        let label = achievement.to_string();
        println!("{} {:<20} {}", mark, label, achievement.description());
    }
    Ok(())
}
