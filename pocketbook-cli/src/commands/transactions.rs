//! Transactions command - list the cached transaction history

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;

pub async fn run(limit: Option<usize>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let transactions = ctx.sync_service.transactions().await;
    let shown = limit.unwrap_or(transactions.len()).min(transactions.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions[..shown])?);
        return Ok(());
    }

    if transactions.is_empty() {
        println!(
            "{}",
            "No cached transactions. Run 'pb sync' to fetch some.".yellow()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Description", "Category", "Status", "Amount"]);

    for tx in &transactions[..shown] {
        table.add_row(vec![
            tx.date.clone(),
            tx.description.clone(),
            tx.category.clone(),
            tx.status.clone(),
            tx.amount.to_string(),
        ]);
    }

    println!("{}", table);
    if shown < transactions.len() {
        println!("Showing {} of {} transactions", shown, transactions.len());
    }

    Ok(())
}
