//! Transfer command - record an outgoing transfer

use anyhow::Result;
use colored::Colorize;
use pocketbook_core::TransferDraft;
use rust_decimal::Decimal;

use super::get_context;

pub async fn run(card: i64, amount: Decimal, to: &str) -> Result<()> {
    if amount <= Decimal::ZERO {
        anyhow::bail!("Transfer amount must be positive");
    }

    let ctx = get_context()?;
    let updated = ctx
        .transfer_service
        .append_transfer(TransferDraft::outgoing(card, amount, to))
        .await;

    let recorded = &updated[0];
    println!(
        "{} {} to {} from card {}",
        "Recorded:".green(),
        recorded.amount,
        recorded.description,
        recorded.card_id
    );
    println!("  Id: {}", recorded.id);
    println!("  Date: {}", recorded.date);
    println!("  Cached transactions: {}", updated.len());

    Ok(())
}
