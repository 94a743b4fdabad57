//! Transaction domain model

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single wallet transaction belonging to a card
///
/// Matches the wire shape of the remote snapshot: numeric id, owning card id
/// (unmatched ids are tolerated - no referential check), signed amount
/// (positive = credit, negative = debit), ISO-8601 date string, free-text
/// description, category and status tags.
///
/// Identity for deduplication is the `id` field alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub card_id: i64,
    pub amount: Decimal,
    /// ISO-8601 date string, kept verbatim from the wire
    pub date: String,
    pub description: String,
    pub category: String,
    pub status: String,
}

impl Transaction {
    /// Instant this transaction occurred at, for ordering
    ///
    /// Unparseable dates sort last (oldest).
    pub fn occurred_at(&self) -> DateTime<Utc> {
        parse_instant(&self.date).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Parse an ISO-8601 date string into a comparable instant
///
/// Accepts full RFC 3339 timestamps, naive datetimes, and bare dates
/// (interpreted as UTC midnight). String comparison is not used for ordering
/// because mixed offsets would compare wrong lexicographically.
pub fn parse_instant(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc));
    }
    None
}

/// Last id handed out by [`next_id`]
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a unique id for a locally created record
///
/// Ids are epoch milliseconds, bumped past the previous id when two calls
/// land in the same millisecond. Monotonic within a process; shape-compatible
/// with ids already present in cached data.
pub fn next_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    loop {
        let last = LAST_ID.load(Ordering::SeqCst);
        let candidate = if now > last { now } else { last + 1 };
        if LAST_ID
            .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return candidate;
        }
    }
}

/// A user-initiated transfer before id and date assignment
#[derive(Debug, Clone)]
pub struct TransferDraft {
    pub card_id: i64,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub status: String,
}

impl TransferDraft {
    /// Build the draft for an outgoing transfer
    ///
    /// The entered amount is stored negated (transfers are debits), the
    /// destination becomes the description.
    pub fn outgoing(card_id: i64, amount: Decimal, destination: impl Into<String>) -> Self {
        Self {
            card_id,
            amount: -amount.abs(),
            description: destination.into(),
            category: "transfer".to_string(),
            status: "completed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_timestamp() {
        let instant = parse_instant("2024-03-05T14:30:00.000Z").unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-03-05T14:30:00+00:00");
    }

    #[test]
    fn test_parse_bare_date_as_midnight() {
        let instant = parse_instant("2024-01-01").unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_offset_normalized_to_utc() {
        // +02:00 offset must not compare as "later" than the same UTC instant
        let offset = parse_instant("2024-01-01T12:00:00+02:00").unwrap();
        let utc = parse_instant("2024-01-01T10:00:00Z").unwrap();
        assert_eq!(offset, utc);
    }

    #[test]
    fn test_unparseable_date_sorts_oldest() {
        let tx = Transaction {
            id: 1,
            card_id: 1,
            amount: Decimal::ZERO,
            date: "not a date".to_string(),
            description: String::new(),
            category: String::new(),
            status: String::new(),
        };
        assert_eq!(tx.occurred_at(), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_next_id_monotonic() {
        let ids: Vec<i64> = (0..100).map(|_| next_id()).collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "ids must be strictly increasing");
        }
    }

    #[test]
    fn test_outgoing_draft_negates_amount() {
        let draft = TransferDraft::outgoing(7, Decimal::new(5000, 2), "Alice");
        assert_eq!(draft.amount, Decimal::new(-5000, 2));
        assert_eq!(draft.category, "transfer");
        assert_eq!(draft.status, "completed");
    }

    #[test]
    fn test_wire_shape_round_trip() {
        let json = r#"{"id":2,"cardId":3,"amount":-20.5,"date":"2024-02-01","description":"Groceries","category":"food","status":"completed"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.card_id, 3);
        assert_eq!(tx.amount, Decimal::new(-205, 1));

        let back = serde_json::to_string(&tx).unwrap();
        assert!(back.contains("\"cardId\":3"));
    }
}
