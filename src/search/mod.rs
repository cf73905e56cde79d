//! The search engine
//!
//! A pure function over the immutable catalog: filter by substring match,
//! score, rank, paginate. No state, no side effects.

use crate::catalog::Product;

/// Search the catalog for products matching `query`.
///
/// The query is lowercased and trimmed once; a product is retained when its
/// lowercased title or lowercased brand contains the normalized query as a
/// substring. Retained products are scored (the score is a sort key only,
/// never a filter):
///
/// - +2 if the title starts with the query, else +1 if it contains it
/// - +1 if the brand contains it
///
/// Results are ordered by score descending; ties are broken ascending by
/// the original title using `str::cmp` (Unicode code point order), which
/// keeps the ordering deterministic across platforms. The first `skip`
/// matches are then dropped and up to `limit` are returned.
///
/// Inputs are pre-validated by the request boundary: the query is non-empty
/// after trimming and `limit` is at least 1.
pub fn search(catalog: &[Product], query: &str, limit: usize, skip: usize) -> Vec<Product> {
    let normalized = query.trim().to_lowercase();

    let mut hits: Vec<(u8, &Product)> = catalog
        .iter()
        .filter_map(|product| {
            let title = product.title.to_lowercase();
            let brand = product.brand.to_lowercase();

            if !title.contains(&normalized) && !brand.contains(&normalized) {
                return None;
            }

            let mut score = 0u8;
            if title.starts_with(&normalized) {
                score += 2;
            } else if title.contains(&normalized) {
                score += 1;
            }
            if brand.contains(&normalized) {
                score += 1;
            }

            Some((score, product))
        })
        .collect();

    hits.sort_by(|(score_a, a), (score_b, b)| {
        score_b.cmp(score_a).then_with(|| a.title.cmp(&b.title))
    });

    hits.into_iter()
        .skip(skip)
        .take(limit)
        .map(|(_, product)| product.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, brand: &str) -> Product {
        Product::new(title, brand)
    }

    fn phones() -> Vec<Product> {
        vec![
            product("iPhone 14", "Apple"),
            product("Galaxy S21", "Samsung"),
            product("Apple Watch", "Apple"),
        ]
    }

    fn titles(results: &[Product]) -> Vec<&str> {
        results.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_ranking_example() {
        // "Apple Watch": title starts with query (+2) and brand contains it
        // (+1) = 3. "iPhone 14": brand match only = 1. Galaxy excluded.
        let results = search(&phones(), "apple", 10, 0);
        assert_eq!(titles(&results), vec!["Apple Watch", "iPhone 14"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let results = search(&phones(), "xyz", 10, 0);
        assert!(results.is_empty());
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let base = search(&phones(), "apple", 10, 0);
        for variant in ["APPLE", "  Apple  ", "aPpLe", "\tapple\n"] {
            assert_eq!(titles(&search(&phones(), variant, 10, 0)), titles(&base));
        }
    }

    #[test]
    fn test_deterministic() {
        let a = search(&phones(), "apple", 10, 0);
        let b = search(&phones(), "apple", 10, 0);
        assert_eq!(titles(&a), titles(&b));
    }

    #[test]
    fn test_filter_correctness() {
        let results = search(&phones(), "apple", 10, 0);
        for p in &results {
            let hit = p.title.to_lowercase().contains("apple")
                || p.brand.to_lowercase().contains("apple");
            assert!(hit, "{} should not have been retained", p.title);
        }
        assert!(!titles(&results).contains(&"Galaxy S21"));
    }

    #[test]
    fn test_title_contains_scores_below_starts_with() {
        let catalog = vec![
            product("Smart TV Pro", "Vizion"),
            product("Pro Controller", "Nintendo"),
        ];
        // "Pro Controller" starts with the query (2), "Smart TV Pro" only
        // contains it (1)
        let results = search(&catalog, "pro", 10, 0);
        assert_eq!(titles(&results), vec!["Pro Controller", "Smart TV Pro"]);
    }

    #[test]
    fn test_tie_break_is_title_ascending() {
        let catalog = vec![
            product("Zen Earbuds", "Acme"),
            product("Alpha Earbuds", "Acme"),
            product("Mint Earbuds", "Acme"),
        ];
        // All three score 1 on a brand-only match
        let results = search(&catalog, "acme", 10, 0);
        assert_eq!(
            titles(&results),
            vec!["Alpha Earbuds", "Mint Earbuds", "Zen Earbuds"]
        );
    }

    #[test]
    fn test_score_ordering_property() {
        let score = |p: &Product| {
            let title = p.title.to_lowercase();
            let brand = p.brand.to_lowercase();
            let mut s = 0u8;
            if title.starts_with("apple") {
                s += 2;
            } else if title.contains("apple") {
                s += 1;
            }
            if brand.contains("apple") {
                s += 1;
            }
            s
        };

        let mut catalog = phones();
        catalog.push(product("Apple TV", "Apple"));
        catalog.push(product("Pineapple Slicer", "KitchenCo"));

        let results = search(&catalog, "apple", 10, 0);
        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(score(a) >= score(b));
            if score(a) == score(b) {
                assert!(a.title <= b.title);
            }
        }
    }

    #[test]
    fn test_pagination_window() {
        let catalog = vec![
            product("Acme Alpha", "Acme"),
            product("Acme Beta", "Acme"),
            product("Acme Gamma", "Acme"),
            product("Acme Delta", "Acme"),
        ];

        let full = search(&catalog, "acme", 10, 0);
        assert_eq!(full.len(), 4);

        let first_two = search(&catalog, "acme", 2, 0);
        assert_eq!(titles(&first_two), titles(&full)[..2].to_vec());

        let next_two = search(&catalog, "acme", 2, 2);
        assert_eq!(titles(&next_two), titles(&full)[2..].to_vec());
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let results = search(&phones(), "apple", 10, 100);
        assert!(results.is_empty());
    }

    #[test]
    fn test_short_tail_after_skip() {
        let results = search(&phones(), "apple", 10, 1);
        assert_eq!(titles(&results), vec!["iPhone 14"]);
    }

    #[test]
    fn test_empty_catalog() {
        let results = search(&[], "apple", 10, 0);
        assert!(results.is_empty());
    }

    #[test]
    fn test_catalog_not_mutated() {
        let catalog = phones();
        let before = titles(&catalog)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let _ = search(&catalog, "apple", 1, 0);
        assert_eq!(titles(&catalog), before);
    }
}
