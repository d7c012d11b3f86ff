//! orderdesk - Order management backend
//!
//! Serves orders from a backing store, with paginated list reads kept in a
//! cache-aside page cache that every change clears.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::OrderService;
pub use tasks::spawn_cleanup_task;
