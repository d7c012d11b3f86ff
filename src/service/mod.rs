//! Service Module
//!
//! The order service and the key schema of its page cache.

pub mod keys;
mod orders;


pub use keys::{page_cache_key, page_window, parse_page, ORDERS_KEY_PATTERN, PAGE_SIZE};
pub use orders::{Invalidation, Mutation, OrderService};
