//! Stage listing

use anyhow::{Context, Result};
use vault_core::PuzzleTable;

/// Print the puzzle table. Expected answers are never printed.
pub fn run_stages_command(json: bool) -> Result<()> {
    let table = PuzzleTable::love_vault();

    if json {
        let out = serde_json::to_string_pretty(&table).context("Failed to serialize stages")?;
        println!("{}", out);
        return Ok(());
    }

    for stage in table.iter() {
        println!("{}. {} ({:?})", stage.number(), stage.title, stage.kind);
        for line in stage.description.lines() {
            println!("     {}", line);
        }
        println!();
    }
    Ok(())
}
