//! Product record types

use serde::{Deserialize, Serialize};

/// A single product record from the catalog.
///
/// `title` and `brand` are the only fields the search engine looks at.
/// Everything else in the catalog file (price, rating, thumbnail, ...) is
/// opaque payload carried in `extra` and echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product title, non-empty
    pub title: String,
    /// Brand name, non-empty
    pub brand: String,
    /// Remaining descriptive fields, passed through as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Create a product with no extra payload
    pub fn new(title: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            brand: brand.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_round_trip() {
        let json = r#"{"title":"iPhone 14","brand":"Apple","price":799,"rating":4.7}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.title, "iPhone 14");
        assert_eq!(product.brand, "Apple");
        assert_eq!(product.extra["price"], 799);

        let out = serde_json::to_value(&product).unwrap();
        assert_eq!(out["price"], 799);
        assert_eq!(out["rating"], 4.7);
    }
}
