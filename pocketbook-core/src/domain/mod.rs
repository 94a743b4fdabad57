//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with parsing and id-generation helpers - no I/O or external dependencies.

mod card;
mod snapshot;
mod transaction;
pub mod result;

pub use card::{Card, CardDraft};
pub use snapshot::{Profile, Snapshot};
pub use transaction::{next_id, parse_instant, Transaction, TransferDraft};
