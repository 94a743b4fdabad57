//! Sync command - fetch the snapshot and reconcile the cache

use anyhow::Result;
use colored::Colorize;

use super::get_context;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = ctx.sync_service.refresh().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.fetched {
        println!("{} {}", "Synced:".green(), result.source);
        println!("  Transaction breakdown:");
        println!("    Discovered: {}", result.stats.discovered);
        println!("    New: {}", result.stats.new);
        println!("    Skipped: {} (already cached)", result.stats.skipped);
    } else {
        println!(
            "{}",
            "Remote unreachable - showing cached data only.".yellow()
        );
    }
    println!("  Cached transactions: {}", result.transactions.len());

    Ok(())
}
