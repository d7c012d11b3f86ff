//! Cache Module
//!
//! Key-value caching with TTL expiration and glob-pattern key scans.

mod backend;
mod entry;
mod pattern;
mod store;


// Re-export public types
pub use backend::{CacheBackend, MemoryCache};
pub use entry::CacheEntry;
pub use pattern::KeyPattern;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
