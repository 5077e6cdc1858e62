//! Core utilities for the MovieLeague CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: In-memory LRU cache of gross update series
//! - `config`: Database path and feed URL resolution
//! - `format`: Currency formatting
//! - `logging`: Tracing subscriber setup

pub mod cache;
pub mod config;
pub mod format;
pub mod logging;

// Re-export commonly used items for convenience
pub use cache::GrossCache;
pub use config::{resolve_database_path, resolve_feed_url, DB_PATH_ENV_VAR, FEED_URL_ENV_VAR};
pub use format::{format_currency, intcomma};
