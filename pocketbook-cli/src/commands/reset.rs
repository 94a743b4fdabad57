//! Reset command - clear every cached value

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use pocketbook_core::ports::CacheStore;

use super::get_context;

pub async fn run(force: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Clear all cached transactions, cards, and flags?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let ctx = get_context()?;
    ctx.store.clear().await;
    println!("{}", "Cache cleared.".green());

    Ok(())
}
