//! The catalog query engine: filter and sort an in-memory product list.
//!
//! The pipeline order is fixed: inactive products are dropped first, then
//! search / category / featured filters, then the price window, then the
//! sort. All sorts are stable, so products with equal keys keep their
//! relative catalog order.

use crate::model::Product;
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Descending by creation time
    #[default]
    Newest,
    /// Ascending by effective price
    PriceLow,
    /// Descending by effective price
    PriceHigh,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            other => Err(format!(
                "Unknown sort order '{}' (expected newest, price-low or price-high)",
                other
            )),
        }
    }
}

/// Filter and sort parameters for a storefront view.
///
/// `price_min`/`price_max` are inclusive bounds on the effective price;
/// `None` means unbounded on that side. UIs with a bounded price slider
/// should pass their slider values through as-is.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<crate::model::Category>,
    pub featured_only: bool,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub sort: SortOrder,
}

/// Run the query pipeline over the full catalog, returning a new list.
/// Inactive products never appear in the result regardless of the other
/// parameters.
pub fn run_query(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let mut result: Vec<Product> = products.iter().filter(|p| p.active).cloned().collect();

    // Whitespace-only search means no search filter
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());
    if let Some(term) = search {
        let needle = term.to_lowercase();
        result.retain(|p| {
            p.name.to_lowercase().contains(&needle)
                || p
                    .description
                    .as_deref()
                    .map_or(false, |d| d.to_lowercase().contains(&needle))
        });
    }

    if let Some(category) = query.category {
        result.retain(|p| p.category == category);
    }

    if query.featured_only {
        result.retain(|p| p.featured);
    }

    result.retain(|p| {
        let price = p.effective_price();
        query.price_min.map_or(true, |min| price >= min)
            && query.price_max.map_or(true, |max| price <= max)
    });

    match query.sort {
        SortOrder::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::PriceLow => {
            result.sort_by(|a, b| a.effective_price().cmp(&b.effective_price()));
        }
        SortOrder::PriceHigh => {
            result.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_products;

    fn query() -> CatalogQuery {
        CatalogQuery::default()
    }

    #[test]
    fn inactive_products_never_surface() {
        let mut products = initial_products();
        products[0].active = false;
        let inactive_id = products[0].id.clone();

        let result = run_query(&products, &query());
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|p| p.id != inactive_id));

        // Even a direct search for it comes up empty
        let by_name = run_query(
            &products,
            &CatalogQuery {
                search: Some("Premium Leather Wallet".to_string()),
                ..query()
            },
        );
        assert!(by_name.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = initial_products();
        let result = run_query(
            &products,
            &CatalogQuery {
                search: Some("WALLET".to_string()),
                ..query()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Premium Leather Wallet");
    }

    #[test]
    fn search_matches_description_too() {
        let products = initial_products();
        let result = run_query(
            &products,
            &CatalogQuery {
                search: Some("battery life".to_string()),
                ..query()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn blank_search_is_no_filter() {
        let products = initial_products();
        let result = run_query(
            &products,
            &CatalogQuery {
                search: Some("   ".to_string()),
                ..query()
            },
        );
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let products = initial_products();
        let result = run_query(
            &products,
            &CatalogQuery {
                category: Some(crate::model::Category::Fashion),
                ..query()
            },
        );
        assert_eq!(result.len(), 2);
        assert!(result
            .iter()
            .all(|p| p.category == crate::model::Category::Fashion));
    }

    #[test]
    fn featured_only_keeps_featured() {
        let products = initial_products();
        let result = run_query(
            &products,
            &CatalogQuery {
                featured_only: true,
                ..query()
            },
        );
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.featured));
        assert!(result.iter().all(|p| p.id != "3"));
    }

    #[test]
    fn price_window_uses_effective_price_inclusively() {
        let products = initial_products();
        // Wallet sells at 999 (sale), clock at 1299 (no sale)
        let result = run_query(
            &products,
            &CatalogQuery {
                price_min: Some(Decimal::from(999)),
                price_max: Some(Decimal::from(1299)),
                ..query()
            },
        );
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert!(ids.contains(&"1"));
        assert!(ids.contains(&"3"));
        assert!(!ids.contains(&"2"));
    }

    #[test]
    fn unbounded_price_keeps_everything() {
        let products = initial_products();
        let result = run_query(
            &products,
            &CatalogQuery {
                price_min: None,
                price_max: None,
                ..query()
            },
        );
        assert_eq!(result.len(), products.len());
    }

    #[test]
    fn newest_sorts_descending_by_created_at() {
        let products = initial_products();
        let result = run_query(&products, &query());
        for pair in result.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn price_sorts_are_exact_reverses_for_distinct_prices() {
        let products = initial_products();
        // Seed effective prices are all distinct: 999, 4499, 1299, 2499, 850, 899
        let low = run_query(
            &products,
            &CatalogQuery {
                sort: SortOrder::PriceLow,
                ..query()
            },
        );
        let mut high = run_query(
            &products,
            &CatalogQuery {
                sort: SortOrder::PriceHigh,
                ..query()
            },
        );
        high.reverse();
        let low_ids: Vec<&str> = low.iter().map(|p| p.id.as_str()).collect();
        let high_ids: Vec<&str> = high.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(low_ids, high_ids);
    }

    #[test]
    fn input_order_is_preserved_on_ties() {
        let mut products = initial_products();
        let stamp = products[0].created_at;
        for p in &mut products {
            p.created_at = stamp;
        }
        let result = run_query(&products, &query());
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn input_list_is_untouched() {
        let products = initial_products();
        let snapshot = products.clone();
        let _ = run_query(
            &products,
            &CatalogQuery {
                sort: SortOrder::PriceHigh,
                ..query()
            },
        );
        assert_eq!(products, snapshot);
    }
}
