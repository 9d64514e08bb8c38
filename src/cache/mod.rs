//! Cache Module
//!
//! In-memory store adapter with TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{MemoryStore, SharedStore};
