//! Product-Search-RS: a product catalog search service written in Rust
//!
//! Exposes a single scored, ranked, paginated search endpoint over a static
//! in-memory product catalog loaded once at startup.

pub mod catalog;
pub mod config;
pub mod query;
pub mod search;
pub mod web;

pub use catalog::{Catalog, Product};
pub use config::Settings;
pub use query::SearchRequest;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of results per page
pub const DEFAULT_LIMIT: usize = 10;

/// Minimum query length (after trimming) accepted by the API
pub const MIN_QUERY_LEN: usize = 2;
