//! Client-side search, category filter, and sort over an in-memory product list.
//!
//! Everything here is pure: each call re-derives the result from scratch.

use std::collections::HashSet;
use std::str::FromStr;

use crate::products::Product;
use crate::CoreError;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the input order.
    #[default]
    Default,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Rating descending.
    Rating,
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Ok(Self::Default),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            other => Err(CoreError::InvalidSortKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Default => write!(f, "default"),
            SortKey::PriceLow => write!(f, "price-low"),
            SortKey::PriceHigh => write!(f, "price-high"),
            SortKey::Rating => write!(f, "rating"),
        }
    }
}

/// Category selector: every category, or one exact label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Exact label match; `All` matches everything.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

/// Case-insensitive substring match against the product title or category.
/// An empty query matches every product.
#[must_use]
pub fn matches_query(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
}

/// Returns the products matching `query` and `category`, ordered by `sort`.
///
/// Sorting is stable, so products that compare equal keep their input order.
#[must_use]
pub fn filter_products(
    products: &[Product],
    query: &str,
    category: &CategoryFilter,
    sort: SortKey,
) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| matches_query(p, query) && category.matches(&p.category))
        .cloned()
        .collect();

    match sort {
        SortKey::Default => {}
        SortKey::PriceLow => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => filtered.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
    }

    filtered
}

/// Distinct category labels in first-seen order.
#[must_use]
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::products::Rating;

    fn product(id: u64, title: &str, category: &str, price: i64, rate: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: Decimal::new(price, 2),
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate, count: 10 },
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Backpack", "men's clothing", 10995, 3.9),
            product(2, "Gold Ring", "jewelery", 16800, 4.6),
            product(3, "Hard Drive", "electronics", 6400, 3.3),
            product(4, "Rain Jacket", "women's clothing", 3999, 3.8),
            product(5, "Monitor", "electronics", 59999, 4.6),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_query_all_default_returns_input_unchanged() {
        let input = sample();
        let out = filter_products(&input, "", &CategoryFilter::All, SortKey::Default);
        assert_eq!(out, input);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let out = filter_products(&sample(), "RING", &CategoryFilter::All, SortKey::Default);
        assert_eq!(ids(&out), vec![2]);
    }

    #[test]
    fn query_matches_category() {
        let out = filter_products(&sample(), "clothing", &CategoryFilter::All, SortKey::Default);
        assert_eq!(ids(&out), vec![1, 4]);
    }

    #[test]
    fn query_with_no_match_returns_empty() {
        let out = filter_products(&sample(), "toaster", &CategoryFilter::All, SortKey::Default);
        assert!(out.is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let only = CategoryFilter::Only("electronics".to_string());
        let out = filter_products(&sample(), "", &only, SortKey::Default);
        assert_eq!(ids(&out), vec![3, 5]);

        let partial = CategoryFilter::Only("electro".to_string());
        assert!(filter_products(&sample(), "", &partial, SortKey::Default).is_empty());
    }

    #[test]
    fn query_and_category_combine() {
        let only = CategoryFilter::Only("electronics".to_string());
        let out = filter_products(&sample(), "drive", &only, SortKey::Default);
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn price_low_sorts_ascending() {
        let out = filter_products(&sample(), "", &CategoryFilter::All, SortKey::PriceLow);
        assert_eq!(ids(&out), vec![4, 3, 1, 2, 5]);
    }

    #[test]
    fn price_high_reverses_price_low_for_distinct_prices() {
        let low = filter_products(&sample(), "", &CategoryFilter::All, SortKey::PriceLow);
        let high = filter_products(&sample(), "", &CategoryFilter::All, SortKey::PriceHigh);
        let mut reversed = ids(&low);
        reversed.reverse();
        assert_eq!(ids(&high), reversed);
    }

    #[test]
    fn rating_sorts_descending_and_is_stable() {
        let out = filter_products(&sample(), "", &CategoryFilter::All, SortKey::Rating);
        // 2 and 5 tie at 4.6 and keep their input order.
        assert_eq!(ids(&out), vec![2, 5, 1, 4, 3]);
    }

    #[test]
    fn sort_key_parses_known_values() {
        assert_eq!("default".parse::<SortKey>().unwrap(), SortKey::Default);
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!("PRICE-HIGH".parse::<SortKey>().unwrap(), SortKey::PriceHigh);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
    }

    #[test]
    fn sort_key_rejects_unknown_value() {
        let err = "cheapest".parse::<SortKey>().unwrap_err();
        assert!(err.to_string().contains("cheapest"));
    }

    #[test]
    fn sort_key_display_roundtrips_through_from_str() {
        for key in [SortKey::Default, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Rating] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn category_filter_parses_all_and_labels() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "jewelery".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("jewelery".to_string())
        );
    }

    #[test]
    fn distinct_categories_keeps_first_seen_order() {
        assert_eq!(
            distinct_categories(&sample()),
            vec!["men's clothing", "jewelery", "electronics", "women's clothing"]
        );
    }
}
