//! Storefront paths for catalogue entities.

/// `/product/<slug>`
pub fn product_path(slug: &str) -> String {
    format!("/product/{slug}")
}

/// `/catalogue?category=<slug>`
pub fn category_path(slug: &str) -> String {
    format!("/catalogue?category={slug}")
}

pub const CATALOGUE_PATH: &str = "/catalogue";
