//! Sitemap entries for static, category and product pages.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::routes::{CATALOGUE_PATH, category_path, product_path};
use crate::store::CatalogStore;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_PAGES: [(&str, ChangeFrequency, f32); 4] = [
    ("", ChangeFrequency::Weekly, 1.0),
    (CATALOGUE_PATH, ChangeFrequency::Daily, 0.9),
    ("/about", ChangeFrequency::Monthly, 0.7),
    ("/contact", ChangeFrequency::Monthly, 0.7),
];

/// Static pages, then one entry per category, then one per product.
pub fn build<S>(store: &S, base_url: &str, last_modified: DateTime<Utc>) -> Vec<SitemapEntry>
where
    S: CatalogStore + ?Sized,
{
    let base = base_url.trim_end_matches('/');
    let entry = |path: String, change_frequency, priority| SitemapEntry {
        url: format!("{base}{path}"),
        last_modified,
        change_frequency,
        priority,
    };

    let static_pages = STATIC_PAGES
        .iter()
        .map(|&(path, freq, priority)| entry(path.to_string(), freq, priority));
    let categories = store
        .categories()
        .iter()
        .map(|c| entry(category_path(c.slug.as_str()), ChangeFrequency::Weekly, 0.8));
    let products = store
        .products()
        .iter()
        .map(|p| entry(product_path(p.slug.as_str()), ChangeFrequency::Weekly, 0.8));

    static_pages.chain(categories).chain(products).collect()
}
