//! Product catalog module
//!
//! The catalog is a finite, immutable list of products loaded once at
//! process start and shared read-only across all requests.

mod store;
mod types;

pub use store::{Catalog, CatalogError};
pub use types::Product;
