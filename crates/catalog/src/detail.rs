//! Product Detail Resolver.

use serde::Serialize;

use sangam_core::{DomainError, DomainResult};

use crate::product::Product;
use crate::store::CatalogStore;

/// Everything the product page needs, resolved from a slug.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    pub related: Vec<&'a Product>,
    pub discount_percent: u32,
    pub price_label: String,
    pub original_price_label: Option<String>,
}

/// Resolve a `/product/<slug>` route parameter.
///
/// A miss is `DomainError::NotFound`; callers turn it into a not-found page.
pub fn resolve<'a, S>(store: &'a S, slug: &str) -> DomainResult<ProductDetail<'a>>
where
    S: CatalogStore + ?Sized,
{
    try_resolve(store, slug).ok_or_else(|| {
        tracing::debug!(slug, "product slug not found");
        DomainError::not_found("product", slug)
    })
}

/// Like [`resolve`], with absence as `None`.
pub fn try_resolve<'a, S>(store: &'a S, slug: &str) -> Option<ProductDetail<'a>>
where
    S: CatalogStore + ?Sized,
{
    let product = store.product_by_slug(slug)?;
    let related = store.related_products(&product.id, product.category_slug.as_str());

    Some(ProductDetail {
        product,
        related,
        discount_percent: product.discount_percent(),
        price_label: product.price.to_string(),
        original_price_label: product
            .original_price
            .filter(|_| product.is_discounted())
            .map(|p| p.to_string()),
    })
}
