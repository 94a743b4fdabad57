//! Card domain model

use serde::{Deserialize, Serialize};

/// A payment card in the wallet
///
/// Number and CVV are display placeholders only - nothing here validates or
/// transmits card data. At most one card per wallet is expected to be the
/// default; the merge logic does not enforce that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub is_default: bool,
}

impl Card {
    /// Last four characters of the card number, for presentation
    ///
    /// Counted in characters, not bytes - display numbers may carry
    /// multi-byte mask characters.
    pub fn last_four(&self) -> &str {
        match self.card_number.char_indices().rev().nth(3) {
            Some((idx, _)) => &self.card_number[idx..],
            None => &self.card_number,
        }
    }
}

/// A locally added card before id and defaults are assigned
#[derive(Debug, Clone)]
pub struct CardDraft {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}
