//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The services
//! depend only on these traits, not on concrete implementations.

mod cache_store;
mod remote_source;

pub use cache_store::CacheStore;
pub use remote_source::RemoteSource;
