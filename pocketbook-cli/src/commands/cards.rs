//! Cards command - list the wallet's cards

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let cards = ctx.wallet_service.load_cards().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("{}", "No cards in the wallet.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Number", "Expires", "Type", "Default"]);

    for card in &cards {
        table.add_row(vec![
            card.id.to_string(),
            card.card_name.clone(),
            format!("****{}", card.last_four()),
            card.expiry_date.clone(),
            card.card_type.clone(),
            if card.is_default { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}
