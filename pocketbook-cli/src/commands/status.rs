//! Status command - summary of the cached state

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let summary = ctx.status_service.summary().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Wallet Cache Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec!["Transactions", &summary.transactions.to_string()]);
    table.add_row(vec!["Cards", &summary.cards.to_string()]);
    table.add_row(vec![
        "Onboarding seen",
        if summary.has_seen_onboarding { "yes" } else { "no" },
    ]);

    println!("{}", table);

    if let Some(latest) = &summary.latest_transaction {
        println!();
        println!("Latest transaction: {}", latest);
    }

    Ok(())
}
