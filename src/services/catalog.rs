use crate::cli::SortOrder;
use crate::page::{PageError, Product};

/// Filters the catalog by free-text query and optional category, then sorts.
/// Fixture order is taken as oldest-first, so `Newest` lists it reversed.
pub fn browse(
    catalog: &[Product],
    query: Option<&str>,
    category: Option<&str>,
    sort: SortOrder,
) -> Vec<Product> {
    let needle = query.map(|q| q.to_ascii_lowercase());
    let mut out: Vec<Product> = catalog
        .iter()
        .filter(|p| match needle.as_deref() {
            Some(q) if !q.is_empty() => {
                p.name.to_ascii_lowercase().contains(q)
                    || p.description.to_ascii_lowercase().contains(q)
            }
            _ => true,
        })
        .filter(|p| match category {
            Some(c) => p.category.as_deref() == Some(c),
            None => true,
        })
        .cloned()
        .collect();

    match sort {
        SortOrder::Newest => out.reverse(),
        SortOrder::PriceLow => {
            out.sort_by(|a, b| a.price.total_cmp(&b.price).then_with(|| a.name.cmp(&b.name)))
        }
        SortOrder::PriceHigh => {
            out.sort_by(|a, b| b.price.total_cmp(&a.price).then_with(|| a.name.cmp(&b.name)))
        }
        SortOrder::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    out
}

pub fn find_product<'a>(catalog: &'a [Product], slug: &str) -> Result<&'a Product, PageError> {
    catalog
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| PageError::ProductNotFound(slug.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        let make = |name: &str, slug: &str, description: &str, price: f64, category: &str| Product {
            name: name.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
            price,
            category: Some(category.to_string()),
            featured: false,
        };
        vec![
            make("Beanie", "beanie", "Knit winter hat", 19.99, "accessories"),
            make("Anorak", "anorak", "Water-resistant shell", 89.99, "apparel"),
            make("Tote", "tote", "Canvas carryall", 24.99, "accessories"),
        ]
    }

    #[test]
    fn query_matches_name_or_description_case_insensitively() {
        let hits = browse(&sample(), Some("CANVAS"), None, SortOrder::Name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "tote");
    }

    #[test]
    fn category_filter_narrows_results() {
        let hits = browse(&sample(), None, Some("accessories"), SortOrder::Name);
        let slugs: Vec<&str> = hits.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["beanie", "tote"]);
    }

    #[test]
    fn sort_orders_behave() {
        let by_price: Vec<String> = browse(&sample(), None, None, SortOrder::PriceLow)
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(by_price, vec!["beanie", "tote", "anorak"]);

        let newest: Vec<String> = browse(&sample(), None, None, SortOrder::Newest)
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(newest, vec!["tote", "anorak", "beanie"]);

        let high: Vec<String> = browse(&sample(), None, None, SortOrder::PriceHigh)
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(high, vec!["anorak", "tote", "beanie"]);
    }

    #[test]
    fn unknown_slug_is_a_typed_error() {
        assert_eq!(
            find_product(&sample(), "parka").err(),
            Some(PageError::ProductNotFound("parka".to_string()))
        );
    }
}
