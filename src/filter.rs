// Derived views over the catalog. Both functions keep catalog order.

use crate::model::{Catalog, Category, GameEntry};

/// Entries whose title or description contains `query` (ignoring case) and,
/// when a category is given, whose category matches.
pub fn filter_games<'a>(
    catalog: &'a Catalog,
    query: &str,
    category: Option<Category>,
) -> Vec<&'a GameEntry> {
    let needle = query.to_lowercase();
    catalog
        .games()
        .iter()
        .filter(|g| {
            needle.is_empty()
                || g.title.to_lowercase().contains(&needle)
                || g.description.to_lowercase().contains(&needle)
        })
        .filter(|g| category.is_none_or(|c| g.category == c))
        .collect()
}

pub fn featured_games(catalog: &Catalog, limit: usize) -> Vec<&GameEntry> {
    catalog
        .games()
        .iter()
        .filter(|g| g.featured)
        .take(limit)
        .collect()
}
