//! Catalog view filtering and sorting.
//!
//! Pure functions over a fetched product list; the view recomputes from
//! scratch on every query or sort-key change.

use std::cmp::Ordering;

use kumawat_traders_core::Product;

/// How the catalog view orders its products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Name, case-insensitive, ascending.
    #[default]
    Name,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            _ => None,
        }
    }
}

/// Filter to products whose name or description contains `query`
/// (case-insensitive substring), then order by `sort`.
///
/// The sort is stable: products that compare equal keep their relative
/// order from the input list.
#[must_use]
pub fn filter_and_sort(products: &[Product], query: &str, sort: SortKey) -> Vec<Product> {
    let needle = query.to_lowercase();

    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| compare(a, b, sort));
    matched
}

fn compare(a: &Product, b: &Product, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::PriceLow => a.price.amount().cmp(&b.price.amount()),
        SortKey::PriceHigh => b.price.amount().cmp(&a.price.amount()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kumawat_traders_core::{Price, ProductId};

    fn product(name: &str, description: &str, price: &str) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::parse(price).unwrap(),
            category: "kirana".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_filter_matches_name_or_description() {
        let products = vec![
            product("Basmati Rice 5kg", "Long grain aromatic rice.", "450.00"),
            product("Toor Dal 1kg", "Pigeon peas for dal.", "140.00"),
            product("Sugar 1kg", "Pure white sugar.", "45.00"),
        ];

        let hits = filter_and_sort(&products, "RICE", SortKey::Name);
        assert_eq!(hits.len(), 1);

        // matches on description too
        let hits = filter_and_sort(&products, "pigeon", SortKey::Name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Toor Dal 1kg");
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let products = vec![
            product("B", "", "1.00"),
            product("A", "", "2.00"),
        ];

        let hits = filter_and_sort(&products, "", SortKey::Name);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "A");
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let products = vec![
            product("cement blocks", "", "1.00"),
            product("Atta 5kg", "", "2.00"),
            product("Biscuits", "", "3.00"),
        ];

        let names: Vec<String> = filter_and_sort(&products, "", SortKey::Name)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Atta 5kg", "Biscuits", "cement blocks"]);
    }

    #[test]
    fn test_price_sorts_numerically() {
        let products = vec![
            product("A", "", "120.00"),
            product("B", "", "38.00"),
            product("C", "", "45.00"),
        ];

        let low: Vec<String> = filter_and_sort(&products, "", SortKey::PriceLow)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(low, ["B", "C", "A"]);

        let high: Vec<String> = filter_and_sort(&products, "", SortKey::PriceHigh)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(high, ["A", "C", "B"]);
    }

    #[test]
    fn test_equal_prices_keep_relative_order() {
        let products = vec![
            product("First", "", "50.00"),
            product("Second", "", "10.00"),
            product("Third", "", "10.00"),
        ];

        let sorted: Vec<String> = filter_and_sort(&products, "", SortKey::PriceLow)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(sorted, ["Second", "Third", "First"]);
    }

    #[test]
    fn test_sort_key_parse_round_trip() {
        for key in [SortKey::Name, SortKey::PriceLow, SortKey::PriceHigh] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("newest"), None);
    }
}
