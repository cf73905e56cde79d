//! Catalog loading and ownership

use super::types::Product;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading the catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Shape of the catalog data file: `{ "products": [ ... ] }`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// The owned, immutable product catalog.
///
/// Loaded once, never mutated; handlers borrow the product slice through a
/// shared reference for the process lifetime.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an in-memory product list
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load the catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::new(file.products))
    }

    /// All products, in catalog file order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products":[{{"title":"iPhone 14","brand":"Apple","price":799}},{{"title":"Galaxy S21","brand":"Samsung"}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].title, "iPhone 14");
        assert_eq!(catalog.products()[0].extra["price"], 799);
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_file("/nonexistent/products.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
