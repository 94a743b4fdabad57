//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - jsonbin HTTP client for RemoteSource
//! - JSON-file-backed store for CacheStore
//! - In-memory store and scripted remote for tests

pub mod file_store;
pub mod jsonbin;

#[cfg(test)]
pub mod memory;
